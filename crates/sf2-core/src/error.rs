//! Error types for transform and quantisation operations

use thiserror::Error;

/// Result type for SF2 operations
pub type Sf2Result<T> = Result<T, Sf2Error>;

/// Errors that can occur while transforming or quantising an array
#[derive(Error, Debug)]
pub enum Sf2Error {
    #[error("Dimension mismatch: {rows}x{cols} is not a multiple of {block_rows}x{block_cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        block_rows: usize,
        block_cols: usize,
    },

    #[error("Invalid transform size: {0}")]
    InvalidTransformSize(usize),

    #[error("Invalid subband: layer {layer}, index {index} for a {levels}-level decomposition")]
    InvalidSubband {
        levels: usize,
        layer: usize,
        index: usize,
    },

    #[error("Invalid decomposition depth: {levels} levels for a {rows}x{cols} array")]
    InvalidLevels {
        levels: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid step table: expected 3 rows and at least 1 column, got {rows}x{cols}")]
    InvalidStepTable { rows: usize, cols: usize },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl Sf2Error {
    /// Check that a `rows`x`cols` array tiles exactly into `block_rows`x`block_cols` blocks
    pub fn check_multiple(
        rows: usize,
        cols: usize,
        block_rows: usize,
        block_cols: usize,
    ) -> Sf2Result<()> {
        if block_rows == 0
            || block_cols == 0
            || rows % block_rows != 0
            || cols % block_cols != 0
        {
            return Err(Sf2Error::DimensionMismatch {
                rows,
                cols,
                block_rows,
                block_cols,
            });
        }
        Ok(())
    }
}

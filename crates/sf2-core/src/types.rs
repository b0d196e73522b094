//! Core types for block transforms and wavelet subbands

use crate::consts::NUM_ORIENTATIONS;
use crate::{Sf2Error, Sf2Result};
use ndarray::Array2;

/// Block size of a separable transform or regroup, in rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockSize {
    pub rows: usize,
    pub cols: usize,
}

impl BlockSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Square block of side `n`
    pub fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate that an array of `shape` tiles exactly into blocks of this size
    pub fn check_divides(&self, shape: (usize, usize)) -> Sf2Result<()> {
        Sf2Error::check_multiple(shape.0, shape.1, self.rows, self.cols)
    }
}

impl From<usize> for BlockSize {
    fn from(n: usize) -> Self {
        BlockSize::square(n)
    }
}

impl From<(usize, usize)> for BlockSize {
    fn from((rows, cols): (usize, usize)) -> Self {
        BlockSize::new(rows, cols)
    }
}

/// Detail subband of one wavelet decomposition level
///
/// The discriminant is the row of the subband in a [`SubbandTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subband {
    /// Top-right quadrant: low-pass vertically, high-pass horizontally
    LowHigh = 0,
    /// Bottom-left quadrant: high-pass vertically, low-pass horizontally
    HighLow = 1,
    /// Bottom-right quadrant: high-pass in both directions
    HighHigh = 2,
}

impl Subband {
    pub const ALL: [Subband; NUM_ORIENTATIONS] =
        [Subband::LowHigh, Subband::HighLow, Subband::HighHigh];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Top-left corner of this quadrant in a level whose quadrants are
    /// `half_rows`x`half_cols`
    pub fn origin(&self, half_rows: usize, half_cols: usize) -> (usize, usize) {
        match self {
            Subband::LowHigh => (0, half_cols),
            Subband::HighLow => (half_rows, 0),
            Subband::HighHigh => (half_rows, half_cols),
        }
    }
}

/// Per-subband table of shape `(3, levels + 1)`
///
/// Column `i < levels` holds the LH/HL/HH entries of level `i` (level 0 is
/// the finest). Column `levels` holds the final low-pass band in row 0; rows
/// 1 and 2 of that column are unused and stay zero in computed tables.
/// Used both for quantisation step sizes and for bit-cost (entropy) results.
#[derive(Debug, Clone, PartialEq)]
pub struct SubbandTable {
    values: Array2<f64>,
}

/// Quantisation step per subband
pub type StepTable = SubbandTable;

/// Estimated bit cost per subband
pub type EntropyTable = SubbandTable;

impl SubbandTable {
    /// All-zero table for a `levels`-deep decomposition
    pub fn zeros(levels: usize) -> Self {
        Self {
            values: Array2::zeros((NUM_ORIENTATIONS, levels + 1)),
        }
    }

    /// Table with every entry set to `value`
    pub fn uniform(levels: usize, value: f64) -> Self {
        Self {
            values: Array2::from_elem((NUM_ORIENTATIONS, levels + 1), value),
        }
    }

    pub fn from_array(values: Array2<f64>) -> Sf2Result<Self> {
        let (rows, cols) = values.dim();
        if rows != NUM_ORIENTATIONS || cols == 0 {
            return Err(Sf2Error::InvalidStepTable { rows, cols });
        }
        Ok(Self { values })
    }

    /// Number of decomposition levels this table describes
    pub fn levels(&self) -> usize {
        self.values.ncols() - 1
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn get(&self, row: usize, level: usize) -> f64 {
        self.values[[row, level]]
    }

    pub fn set(&mut self, row: usize, level: usize, value: f64) {
        self.values[[row, level]] = value;
    }

    pub fn detail(&self, subband: Subband, level: usize) -> f64 {
        self.get(subband.index(), level)
    }

    pub fn set_detail(&mut self, subband: Subband, level: usize, value: f64) {
        self.set(subband.index(), level, value);
    }

    /// Entry of the final (coarsest) low-pass band
    pub fn final_low(&self) -> f64 {
        self.get(0, self.levels())
    }

    pub fn set_final_low(&mut self, value: f64) {
        let levels = self.levels();
        self.set(0, levels, value);
    }

    /// Sum of all entries
    pub fn total(&self) -> f64 {
        self.values.sum()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_array(self) -> Array2<f64> {
        self.values
    }
}

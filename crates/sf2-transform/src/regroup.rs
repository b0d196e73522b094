//! Coefficient regrouping
//!
//! After an N×N block DCT, coefficient `(u, v)` of every block is moved into
//! sub-image `(u, v)`, so that each of the N² sub-images collects one
//! frequency from all blocks, laid out like a subband.

use ndarray::{Array2, ArrayBase, Data, Ix2};
use sf2_core::{BlockSize, Sf2Result};

/// Regroup the rows and columns of `x`
///
/// Rows (columns) that are `n.rows` (`n.cols`) apart in `x` become adjacent
/// in the result. Equivalent to viewing `x` as
/// `(rows/Nr, Nr, cols/Nc, Nc)`, swapping the axes within each pair and
/// flattening back.
pub fn regroup<S: Data<Elem = f64>>(
    x: &ArrayBase<S, Ix2>,
    n: impl Into<BlockSize>,
) -> Sf2Result<Array2<f64>> {
    let n = n.into();
    n.check_divides(x.dim())?;

    let (rows, cols) = x.dim();
    let sub_rows = rows / n.rows;
    let sub_cols = cols / n.cols;
    Ok(Array2::from_shape_fn((rows, cols), |(r, c)| {
        x[[
            (r % sub_rows) * n.rows + r / sub_rows,
            (c % sub_cols) * n.cols + c / sub_cols,
        ]]
    }))
}

/// Undo [`regroup`] with the same block size
///
/// Equivalent to regrouping with the transposed factor `(rows/Nr, cols/Nc)`.
pub fn regroup_inverse<S: Data<Elem = f64>>(
    y: &ArrayBase<S, Ix2>,
    n: impl Into<BlockSize>,
) -> Sf2Result<Array2<f64>> {
    let n = n.into();
    n.check_divides(y.dim())?;

    let (rows, cols) = y.dim();
    let sub_rows = rows / n.rows;
    let sub_cols = cols / n.cols;
    Ok(Array2::from_shape_fn((rows, cols), |(r, c)| {
        y[[
            (r % n.rows) * sub_rows + r / n.rows,
            (c % n.cols) * sub_cols + c / n.cols,
        ]]
    }))
}

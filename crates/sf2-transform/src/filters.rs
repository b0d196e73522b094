//! Row filter bank primitives for the wavelet transform
//!
//! `rowdec`/`rowdec2` filter every row of an array and keep the even/odd
//! output samples; `rowint`/`rowint2` insert the columns of an array at the
//! even/odd positions of a zero row twice as long and filter it. Rows are
//! extended symmetrically at both ends: whole-sample symmetry (`x[-1] = x[1]`)
//! for odd-length kernels, half-sample symmetry (`x[-1] = x[0]`) for
//! even-length kernels. With this extension the LeGall 5/3 pair below gives
//! perfect reconstruction for any even row length.

use ndarray::{s, Array2, ArrayBase, ArrayView2, Data, Ix2};
use sf2_core::{Sf2Error, Sf2Result};

/// LeGall analysis low-pass kernel
pub const LEGALL_H1: [f64; 5] = [-0.125, 0.25, 0.75, 0.25, -0.125];

/// LeGall analysis high-pass kernel
pub const LEGALL_H2: [f64; 3] = [-0.25, 0.5, -0.25];

/// LeGall synthesis low-pass kernel
pub const LEGALL_G1: [f64; 3] = [0.5, 1.0, 0.5];

/// LeGall synthesis high-pass kernel
pub const LEGALL_G2: [f64; 5] = [-0.25, -0.5, 1.5, -0.5, -0.25];

/// Analysis (`h1`, `h2`) and synthesis (`g1`, `g2`) kernels of a two-band filter bank
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    pub h1: Vec<f64>,
    pub h2: Vec<f64>,
    pub g1: Vec<f64>,
    pub g2: Vec<f64>,
}

impl FilterBank {
    pub fn new(h1: Vec<f64>, h2: Vec<f64>, g1: Vec<f64>, g2: Vec<f64>) -> Sf2Result<Self> {
        for kernel in [&h1, &h2, &g1, &g2] {
            check_kernel(kernel)?;
        }
        Ok(Self { h1, h2, g1, g2 })
    }

    /// LeGall 5/3 filter pair
    pub fn legall() -> Self {
        Self {
            h1: LEGALL_H1.to_vec(),
            h2: LEGALL_H2.to_vec(),
            g1: LEGALL_G1.to_vec(),
            g2: LEGALL_G2.to_vec(),
        }
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::legall()
    }
}

fn check_kernel(h: &[f64]) -> Sf2Result<()> {
    if h.is_empty() {
        return Err(Sf2Error::InvalidFilter("kernel is empty".to_string()));
    }
    Ok(())
}

/// Map index `j` of a symmetrically extended row back into `0..len`
fn extend_index(j: isize, len: usize, whole_sample: bool) -> usize {
    let len = len as isize;
    if len == 1 {
        return 0;
    }
    let (period, last) = if whole_sample {
        (2 * (len - 1), 2 * (len - 1))
    } else {
        (2 * len, 2 * len - 1)
    };
    let j = j.rem_euclid(period);
    if j >= len {
        (last - j) as usize
    } else {
        j as usize
    }
}

/// Filter each row of `x` with `h` centred on columns `start, start + step, ...`,
/// producing `out_cols` samples per row
fn filter_rows(
    x: ArrayView2<'_, f64>,
    h: &[f64],
    start: usize,
    step: usize,
    out_cols: usize,
) -> Array2<f64> {
    let (rows, cols) = x.dim();
    let offset = (h.len() / 2) as isize;
    let whole_sample = h.len() % 2 == 1;

    Array2::from_shape_fn((rows, out_cols), |(r, k)| {
        let t = (start + k * step) as isize;
        h.iter()
            .enumerate()
            .map(|(i, &hi)| hi * x[[r, extend_index(t + i as isize - offset, cols, whole_sample)]])
            .sum()
    })
}

/// Place the columns of `x` on every other column of a zero array, from `phase`
fn upsample_rows(x: ArrayView2<'_, f64>, phase: usize) -> Array2<f64> {
    let (rows, cols) = x.dim();
    let mut up = Array2::zeros((rows, 2 * cols));
    up.slice_mut(s![.., phase..;2]).assign(&x);
    up
}

/// Filter the rows of `x` with `h` and keep the even-indexed columns
///
/// Only columns `0, 2, ..` below `cols - 1` are kept, so an odd-width row
/// drops its last sample and both decimators return `cols / 2` columns.
pub fn rowdec<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>, h: &[f64]) -> Sf2Result<Array2<f64>> {
    check_kernel(h)?;
    Ok(filter_rows(x.view(), h, 0, 2, x.ncols() / 2))
}

/// Filter the rows of `x` with `h` and keep the odd-indexed columns
pub fn rowdec2<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>, h: &[f64]) -> Sf2Result<Array2<f64>> {
    check_kernel(h)?;
    Ok(filter_rows(x.view(), h, 1, 2, x.ncols() / 2))
}

/// Interpolate the rows of `x` to twice their length, samples on even columns
pub fn rowint<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>, g: &[f64]) -> Sf2Result<Array2<f64>> {
    check_kernel(g)?;
    Ok(filter_rows(upsample_rows(x.view(), 0).view(), g, 0, 1, 2 * x.ncols()))
}

/// Interpolate the rows of `x` to twice their length, samples on odd columns
pub fn rowint2<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>, g: &[f64]) -> Sf2Result<Array2<f64>> {
    check_kernel(g)?;
    Ok(filter_rows(upsample_rows(x.view(), 1).view(), g, 0, 1, 2 * x.ncols()))
}

//! DCT (Discrete Cosine Transform) matrices and separable block transforms
//!
//! An N×N block DCT is computed as two passes of [`colxfm`]: once over the
//! columns of every horizontal stripe of N rows, once more over the transpose.

use std::borrow::Cow;
use std::f64::consts::PI;

use ndarray::{s, Array2, ArrayBase, Data, Ix2};
use rayon::prelude::*;
use sf2_core::{BlockSize, Sf2Error, Sf2Result};

lazy_static::lazy_static! {
    static ref DCT_II_8: Array2<f64> = build_dct_ii(8);
}

fn build_dct_ii(n: usize) -> Array2<f64> {
    let dc = 1.0 / (n as f64).sqrt();
    let gain = (2.0 / n as f64).sqrt();
    Array2::from_shape_fn((n, n), |(i, k)| {
        if i == 0 {
            dc
        } else {
            gain * ((k as f64 + 0.5) * PI * i as f64 / n as f64).cos()
        }
    })
}

fn build_dct_iv(n: usize) -> Array2<f64> {
    let gain = (2.0 / n as f64).sqrt();
    Array2::from_shape_fn((n, n), |(i, k)| {
        gain * ((k as f64 + 0.5) * PI * (i as f64 + 0.5) / n as f64).cos()
    })
}

fn check_transform_size(n: usize) -> Sf2Result<()> {
    if n == 0 {
        return Err(Sf2Error::InvalidTransformSize(n));
    }
    Ok(())
}

/// Orthogonal Type-II DCT matrix of size `n`
///
/// `Y = C · X` transforms the N-vector `X`. Row 0 is the constant DC basis
/// vector `1/√N`.
pub fn dct_ii(n: usize) -> Sf2Result<Array2<f64>> {
    check_transform_size(n)?;
    Ok(build_dct_ii(n))
}

/// Orthogonal Type-IV DCT matrix of size `n`
pub fn dct_iv(n: usize) -> Sf2Result<Array2<f64>> {
    check_transform_size(n)?;
    Ok(build_dct_iv(n))
}

/// DCT-II matrix, borrowed from the static table for the common 8×8 case
fn dct_ii_shared(n: usize) -> Sf2Result<Cow<'static, Array2<f64>>> {
    if n == 8 {
        Ok(Cow::Borrowed(&*DCT_II_8))
    } else {
        dct_ii(n).map(Cow::Owned)
    }
}

/// Transform the columns of `x` with the N×N matrix `c`
///
/// Every stripe of N consecutive rows is replaced by `c` times that stripe.
/// The row count of `x` must be a multiple of N. Stripes are transformed in
/// parallel.
pub fn colxfm<S, T>(x: &ArrayBase<S, Ix2>, c: &ArrayBase<T, Ix2>) -> Sf2Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    let n = c.nrows();
    if c.ncols() != n {
        return Err(Sf2Error::ShapeMismatch {
            expected: (n, n),
            actual: c.dim(),
        });
    }
    check_transform_size(n)?;

    let (rows, cols) = x.dim();
    Sf2Error::check_multiple(rows, cols, n, 1)?;

    let x = x.view();
    let c = c.view();
    let stripes: Vec<Array2<f64>> = (0..rows / n)
        .into_par_iter()
        .map(|i| c.dot(&x.slice(s![i * n..(i + 1) * n, ..])))
        .collect();

    let mut y = Array2::zeros((rows, cols));
    for (i, stripe) in stripes.iter().enumerate() {
        y.slice_mut(s![i * n..(i + 1) * n, ..]).assign(stripe);
    }
    Ok(y)
}

/// Forward N×N block DCT of `x`
///
/// Both dimensions of `x` must be multiples of `n`.
pub fn dct<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>, n: usize) -> Sf2Result<Array2<f64>> {
    check_transform_size(n)?;
    BlockSize::square(n).check_divides(x.dim())?;
    let c = dct_ii_shared(n)?;

    let y = colxfm(x, &*c)?;
    let y = colxfm(&y.t(), &*c)?;
    Ok(y.reversed_axes())
}

/// Inverse N×N block DCT, undoing [`dct`] exactly up to rounding
pub fn idct<S: Data<Elem = f64>>(y: &ArrayBase<S, Ix2>, n: usize) -> Sf2Result<Array2<f64>> {
    check_transform_size(n)?;
    BlockSize::square(n).check_divides(y.dim())?;
    let c = dct_ii_shared(n)?;

    let ct = c.t();
    let z = colxfm(&y.t(), &ct)?;
    colxfm(&z.t(), &ct)
}

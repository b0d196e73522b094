//! Uniform scalar quantisation

use ndarray::{Array, ArrayBase, Data, Dimension};
use sf2_core::{Sf2Error, Sf2Result};

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Quantisation indices of `x` for step size `step`
///
/// The first non-zero level starts at `rise` (default `step / 2`, a plain
/// mid-tread quantiser); larger rises widen the zero bin. A step of zero or
/// less leaves `x` unchanged.
pub fn quant1<S, D>(x: &ArrayBase<S, D>, step: f64, rise: Option<f64>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if step <= 0.0 {
        return x.to_owned();
    }
    let rise = rise.unwrap_or(step / 2.0);
    x.mapv(|v| {
        let q = ((v.abs() - rise) / step).ceil();
        if q > 0.0 {
            q * sign(v)
        } else {
            0.0
        }
    })
}

/// Reconstruction values for quantisation indices `q`
///
/// With a custom `rise` every non-zero level is shifted outwards by
/// `rise - step / 2` so it sits in the middle of its bin.
pub fn quant2<S, D>(q: &ArrayBase<S, D>, step: f64, rise: Option<f64>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if step <= 0.0 {
        return q.to_owned();
    }
    match rise {
        None => q.mapv(|v| v * step),
        Some(rise) => q.mapv(|v| v * step + sign(v) * (rise - step / 2.0)),
    }
}

/// Quantise `x` to multiples of `step`
pub fn quantise<S, D>(x: &ArrayBase<S, D>, step: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    quant2(&quant1(x, step, None), step, None)
}

/// Quantise `x` with a zero bin extending to `±rise`
pub fn quantise_with_rise<S, D>(x: &ArrayBase<S, D>, step: f64, rise: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    quant2(&quant1(x, step, Some(rise)), step, Some(rise))
}

/// Root-mean-square difference between two equally shaped arrays
pub fn rms_error<S, T, D>(a: &ArrayBase<S, D>, b: &ArrayBase<T, D>) -> Sf2Result<f64>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return Err(Sf2Error::ShapeMismatch {
            expected: shape2(a.shape()),
            actual: shape2(b.shape()),
        });
    }
    if a.is_empty() {
        return Ok(0.0);
    }
    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok((sum / a.len() as f64).sqrt())
}

/// Leading two extents of a shape, for error reporting
fn shape2(shape: &[usize]) -> (usize, usize) {
    match shape {
        [] => (1, 1),
        [n] => (1, *n),
        [rows, cols, ..] => (*rows, *cols),
    }
}

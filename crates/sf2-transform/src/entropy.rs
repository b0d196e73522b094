//! First-order entropy estimates for bit-cost accounting
//!
//! These figures approximate the cost of an ideal entropy coder; nothing is
//! actually encoded.

use std::collections::BTreeMap;

use ndarray::{s, ArrayBase, Data, Dimension, Ix2};
use rayon::prelude::*;
use sf2_core::{BlockSize, Sf2Result};

/// Entropy of `x` in bits per element
///
/// Values are binned into unit-width bins centred on the integers; only
/// occupied bins are stored, so the value range does not matter.
/// Non-finite values are skipped. A constant or empty array costs nothing.
pub fn bpp<S, D>(x: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &v in x.iter().filter(|v| v.is_finite()) {
        *counts.entry((v + 0.5).floor() as i64).or_insert(0) += 1;
    }
    if counts.len() < 2 {
        return 0.0;
    }

    let total: usize = counts.values().sum();
    let total = total as f64;
    let bits: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    bits.max(0.0)
}

/// Total bits needed for a regrouped block-DCT array
///
/// `yr` is split into the `n.rows × n.cols` sub-images produced by
/// [`regroup`](crate::regroup); each is costed separately at
/// `bpp(sub-image) × pixels`.
pub fn dctbpp<S: Data<Elem = f64>>(
    yr: &ArrayBase<S, Ix2>,
    n: impl Into<BlockSize>,
) -> Sf2Result<f64> {
    let n = n.into();
    n.check_divides(yr.dim())?;

    let (rows, cols) = yr.dim();
    let sub_rows = rows / n.rows;
    let sub_cols = cols / n.cols;
    let pixels = (sub_rows * sub_cols) as f64;

    let yr = yr.view();
    let bits = (0..n.area())
        .into_par_iter()
        .map(|k| {
            let (i, j) = (k / n.cols, k % n.cols);
            let sub = yr.slice(s![
                i * sub_rows..(i + 1) * sub_rows,
                j * sub_cols..(j + 1) * sub_cols
            ]);
            bpp(&sub) * pixels
        })
        .sum();
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dct, quantise, regroup};
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};
    use sf2_core::Sf2Error;

    #[test]
    fn test_bpp_constant_and_empty() {
        assert_eq!(bpp(&Array2::from_elem((8, 8), 5.0)), 0.0);
        assert_eq!(bpp(&Array2::<f64>::zeros((0, 0))), 0.0);
    }

    #[test]
    fn test_bpp_uniform_symbols() {
        assert_abs_diff_eq!(bpp(&array![0.0, 1.0, 0.0, 1.0]), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bpp(&array![[0.0, 1.0], [2.0, 3.0]]), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bpp(&array![-10.0, 10.0, -10.0, 10.0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bpp_skewed() {
        let x = array![0.0, 0.0, 0.0, 1.0];
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        assert_abs_diff_eq!(bpp(&x), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_bpp_bins_round_to_nearest() {
        // 0.2 and 0.4 share the bin centred on 0, 0.6 falls in the bin centred on 1
        assert_abs_diff_eq!(bpp(&array![0.2, 0.4]), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bpp(&array![0.2, 0.6]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bpp_wide_range() {
        assert_abs_diff_eq!(bpp(&array![0.0, 1.0e13]), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bpp(&array![-1.0e300, 0.0, 1.0e300, 0.0]), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_bpp_skips_non_finite() {
        assert_eq!(bpp(&array![0.0, f64::INFINITY]), 0.0);
        assert_eq!(bpp(&array![f64::NAN, f64::NEG_INFINITY]), 0.0);
        assert_abs_diff_eq!(
            bpp(&array![0.0, 1.0, f64::INFINITY, f64::NAN]),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dctbpp_unquantised_outliers() {
        let mut yr = Array2::<f64>::zeros((4, 4));
        yr[[0, 0]] = 1.0e15;
        yr[[3, 3]] = f64::INFINITY;
        let bits = dctbpp(&yr, 2).unwrap();
        // one outlier among the 4 pixels of the first sub-image
        let expected = 4.0 * -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        assert_abs_diff_eq!(bits, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_bpp_decreases_with_step() {
        let x = Array2::from_shape_fn((32, 32), |(r, c)| (r * 32 + c) as f64 * 0.25 - 128.0);
        let mut previous = f64::INFINITY;
        for step in [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0] {
            let bits = bpp(&quantise(&x, step));
            assert!(bits <= previous, "step {} gave {} > {}", step, bits, previous);
            previous = bits;
        }
    }

    #[test]
    fn test_dctbpp_zeros() {
        let x = Array2::<f64>::zeros((256, 256));
        let yr = regroup(&dct(&x, 8).unwrap(), 8).unwrap();
        assert_eq!(dctbpp(&yr, 8).unwrap(), 0.0);
    }

    #[test]
    fn test_dctbpp_sums_subimages() {
        let yr = Array2::from_shape_fn((4, 4), |(r, c)| if r < 2 && c < 2 { ((r + c) % 2) as f64 } else { 0.0 });
        // only the top-left 2x2 sub-image varies: 1 bit for each of its 4 pixels
        assert_abs_diff_eq!(dctbpp(&yr, 2).unwrap(), 4.0, epsilon = 1e-12);
        // as a single sub-image: 2 ones among 16 pixels
        let expected = 16.0 * -(0.875f64 * 0.875f64.log2() + 0.125 * 0.125f64.log2());
        assert_abs_diff_eq!(dctbpp(&yr, 1).unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_dctbpp_rectangular() {
        let yr = Array2::from_shape_fn((4, 8), |(_, c)| (c / 2) as f64);
        // sub-images are 2x2; every one is constant within itself
        assert_abs_diff_eq!(dctbpp(&yr, (2, 4)).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dctbpp_dimension_mismatch() {
        let yr = Array2::<f64>::zeros((255, 255));
        assert!(matches!(dctbpp(&yr, 8), Err(Sf2Error::DimensionMismatch { .. })));
    }
}

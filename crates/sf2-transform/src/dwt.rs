//! Discrete wavelet transform built on the row filter bank
//!
//! A 1-level [`dwt`] splits an array into four quadrants: low-low (top-left),
//! low-high (top-right), high-low (bottom-left) and high-high (bottom-right).
//! The multi-level transform recurses into the low-low quadrant only, so
//! after `n` levels the array holds `3n` detail subbands plus one coarse
//! low-pass band of size `rows/2^n × cols/2^n`.

use log::{debug, trace};
use ndarray::{concatenate, s, Array2, ArrayBase, Axis, Data, Ix2};
use rayon::prelude::*;
use sf2_core::consts::{DEFAULT_IMAGE_SIZE, IMPULSE_MAGNITUDE};
use sf2_core::{EntropyTable, Sf2Error, Sf2Result, StepTable, Subband, SubbandTable};

use crate::entropy::bpp;
use crate::filters::{
    rowdec, rowdec2, rowint, rowint2, FilterBank, LEGALL_G1, LEGALL_G2, LEGALL_H1, LEGALL_H2,
};
use crate::quantization::quantise;

/// Validate that a `rows`x`cols` array can be decomposed `levels` times
fn check_levels(rows: usize, cols: usize, levels: usize) -> Sf2Result<()> {
    let factor = u32::try_from(levels)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(Sf2Error::InvalidLevels { levels, rows, cols })?;
    Sf2Error::check_multiple(rows, cols, factor, factor)
}

/// 1-level 2-D DWT of `x` with the LeGall analysis pair
pub fn dwt<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>) -> Sf2Result<Array2<f64>> {
    dwt_with(x, &LEGALL_H1, &LEGALL_H2)
}

/// 1-level 2-D DWT of `x` with analysis kernels `h1` (low) and `h2` (high)
///
/// Both dimensions of `x` must be even.
pub fn dwt_with<S: Data<Elem = f64>>(
    x: &ArrayBase<S, Ix2>,
    h1: &[f64],
    h2: &[f64],
) -> Sf2Result<Array2<f64>> {
    let (rows, cols) = x.dim();
    Sf2Error::check_multiple(rows, cols, 2, 2)?;

    let lo = rowdec(x, h1)?;
    let hi = rowdec2(x, h2)?;
    let y = concatenate(Axis(1), &[lo.view(), hi.view()])?;

    let lo = rowdec(&y.t(), h1)?;
    let hi = rowdec2(&y.t(), h2)?;
    Ok(concatenate(Axis(0), &[lo.t(), hi.t()])?)
}

/// 1-level 2-D inverse DWT of `y` with the LeGall synthesis pair
pub fn idwt<S: Data<Elem = f64>>(y: &ArrayBase<S, Ix2>) -> Sf2Result<Array2<f64>> {
    idwt_with(y, &LEGALL_G1, &LEGALL_G2)
}

/// 1-level 2-D inverse DWT of `y` with synthesis kernels `g1` (low) and `g2` (high)
pub fn idwt_with<S: Data<Elem = f64>>(
    y: &ArrayBase<S, Ix2>,
    g1: &[f64],
    g2: &[f64],
) -> Sf2Result<Array2<f64>> {
    let (rows, cols) = y.dim();
    Sf2Error::check_multiple(rows, cols, 2, 2)?;
    let (half_rows, half_cols) = (rows / 2, cols / 2);

    let top = rowint(&y.slice(s![..half_rows, ..]).t(), g1)?;
    let bottom = rowint2(&y.slice(s![half_rows.., ..]).t(), g2)?;
    let x = (top + bottom).reversed_axes();

    let left = rowint(&x.slice(s![.., ..half_cols]), g1)?;
    let right = rowint2(&x.slice(s![.., half_cols..]), g2)?;
    Ok(left + right)
}

/// `levels`-level DWT of `x` with the LeGall filters
pub fn nlevdwt<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>, levels: usize) -> Sf2Result<Array2<f64>> {
    nlevdwt_with(x, levels, &FilterBank::legall())
}

/// `levels`-level DWT of `x`
///
/// Both dimensions must be divisible by `2^levels`. Each level transforms
/// only the low-low quadrant left by the previous one; zero levels returns
/// an unchanged copy.
pub fn nlevdwt_with<S: Data<Elem = f64>>(
    x: &ArrayBase<S, Ix2>,
    levels: usize,
    filters: &FilterBank,
) -> Sf2Result<Array2<f64>> {
    let (rows, cols) = x.dim();
    check_levels(rows, cols, levels)?;

    let mut y = x.to_owned();
    let (mut m, mut n) = (rows, cols);
    for level in 0..levels {
        debug!("dwt level {}: {}x{}", level, m, n);
        let low = dwt_with(&y.slice(s![..m, ..n]), &filters.h1, &filters.h2)?;
        y.slice_mut(s![..m, ..n]).assign(&low);
        m /= 2;
        n /= 2;
    }
    Ok(y)
}

/// Inverse of [`nlevdwt`]
pub fn nlevidwt<S: Data<Elem = f64>>(y: &ArrayBase<S, Ix2>, levels: usize) -> Sf2Result<Array2<f64>> {
    nlevidwt_with(y, levels, &FilterBank::legall())
}

/// Inverse of [`nlevdwt_with`], starting from the coarsest low-low quadrant
pub fn nlevidwt_with<S: Data<Elem = f64>>(
    y: &ArrayBase<S, Ix2>,
    levels: usize,
    filters: &FilterBank,
) -> Sf2Result<Array2<f64>> {
    let (rows, cols) = y.dim();
    check_levels(rows, cols, levels)?;

    let mut x = y.to_owned();
    let (mut m, mut n) = (rows >> levels, cols >> levels);
    for level in (0..levels).rev() {
        m *= 2;
        n *= 2;
        debug!("idwt level {}: {}x{}", level, m, n);
        let rebuilt = idwt_with(&x.slice(s![..m, ..n]), &filters.g1, &filters.g2)?;
        x.slice_mut(s![..m, ..n]).assign(&rebuilt);
    }
    Ok(x)
}

/// Quantise every subband of an `n`-level DWT and record its bit cost
///
/// `steps` must have shape `(3, n + 1)`; see [`SubbandTable`]. Returns the
/// quantised coefficients and a table of the same shape holding
/// `bpp × pixels` for each subband. Rows 1 and 2 of the last column are left
/// at zero.
pub fn quantdwt<S: Data<Elem = f64>>(
    y: &ArrayBase<S, Ix2>,
    steps: &StepTable,
) -> Sf2Result<(Array2<f64>, EntropyTable)> {
    let levels = steps.levels();
    let (rows, cols) = y.dim();
    check_levels(rows, cols, levels)?;

    let mut yq = y.to_owned();
    let mut entropy = SubbandTable::zeros(levels);
    let (mut m, mut n) = (rows, cols);
    for level in 0..levels {
        m /= 2;
        n /= 2;
        let pixels = (m * n) as f64;
        for band in Subband::ALL {
            let (r0, c0) = band.origin(m, n);
            let mut region = yq.slice_mut(s![r0..r0 + m, c0..c0 + n]);
            let quantised = quantise(&region, steps.detail(band, level));
            let bits = bpp(&quantised) * pixels;
            region.assign(&quantised);
            entropy.set_detail(band, level, bits);
            trace!("level {} {:?}: {:.1} bits", level, band, bits);
        }
    }

    let mut low = yq.slice_mut(s![..m, ..n]);
    let quantised = quantise(&low, steps.final_low());
    let bits = bpp(&quantised) * (m * n) as f64;
    low.assign(&quantised);
    entropy.set_final_low(bits);
    trace!("final low-pass: {:.1} bits", bits);

    Ok((yq, entropy))
}

/// Position of the probe impulse for subband `index` of `layer`
fn impulse_position(
    (rows, cols): (usize, usize),
    levels: usize,
    layer: usize,
    index: usize,
) -> Sf2Result<(usize, usize)> {
    let invalid = Sf2Error::InvalidSubband {
        levels,
        layer,
        index,
    };
    if layer == levels {
        if index != 0 {
            return Err(invalid);
        }
        let (m, n) = (rows >> levels, cols >> levels);
        return Ok((m / 2, n / 2));
    }
    if layer > levels {
        return Err(invalid);
    }
    let band = Subband::from_index(index).ok_or(invalid)?;
    let (m, n) = (rows >> (layer + 1), cols >> (layer + 1));
    let (r0, c0) = band.origin(m, n);
    Ok((r0 + m / 2, c0 + n / 2))
}

/// Energy of the 256×256 reconstruction of a single impulse in one subband
///
/// `index` selects LH (0), HL (1) or HH (2) of `layer`; at `layer == levels`
/// only index 0, the final low-pass band, is valid.
pub fn energy_z(levels: usize, layer: usize, index: usize) -> Sf2Result<f64> {
    energy_z_sized((DEFAULT_IMAGE_SIZE, DEFAULT_IMAGE_SIZE), levels, layer, index)
}

/// [`energy_z`] for an arbitrary working size
pub fn energy_z_sized(
    shape: (usize, usize),
    levels: usize,
    layer: usize,
    index: usize,
) -> Sf2Result<f64> {
    check_levels(shape.0, shape.1, levels)?;
    let position = impulse_position(shape, levels, layer, index)?;

    let mut y = Array2::zeros(shape);
    y[position] = IMPULSE_MAGNITUDE;
    let z = nlevidwt(&y, levels)?;
    Ok(z.iter().map(|v| v * v).sum())
}

/// [`energy_z`] for every subband of a `levels`-level DWT
pub fn impulse_energies(levels: usize) -> Sf2Result<SubbandTable> {
    impulse_energies_sized((DEFAULT_IMAGE_SIZE, DEFAULT_IMAGE_SIZE), levels)
}

/// [`energy_z_sized`] for every subband, laid out like a step table
pub fn impulse_energies_sized(shape: (usize, usize), levels: usize) -> Sf2Result<SubbandTable> {
    check_levels(shape.0, shape.1, levels)?;

    let mut probes: Vec<(usize, usize)> = (0..levels)
        .flat_map(|layer| Subband::ALL.map(|band| (band.index(), layer)))
        .collect();
    probes.push((0, levels));

    let energies = probes
        .into_par_iter()
        .map(|(index, layer)| {
            energy_z_sized(shape, levels, layer, index).map(|energy| (index, layer, energy))
        })
        .collect::<Sf2Result<Vec<_>>>()?;

    let mut table = SubbandTable::zeros(levels);
    for (index, layer, energy) in energies {
        table.set(index, layer, energy);
    }
    Ok(table)
}

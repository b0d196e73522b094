//! Edge cases: degenerate inputs, dimension checks and subband probes

use approx::assert_abs_diff_eq;
use ndarray::{s, Array2};
use sf2::*;

#[test]
fn test_zero_image_dct() {
    let x = Array2::<f64>::zeros((256, 256));
    let y = dct(&x, 8).unwrap();
    assert!(y.iter().all(|&v| v == 0.0));
    assert_eq!(dctbpp(&regroup(&x, 8).unwrap(), 8).unwrap(), 0.0);
}

#[test]
fn test_constant_image_dwt() {
    let x = Array2::from_elem((256, 256), -37.5);
    let y = dwt(&x).unwrap();
    for v in y.slice(s![..128, ..128]).iter() {
        assert_abs_diff_eq!(*v, -37.5, epsilon = 1e-10);
    }
    for band in Subband::ALL {
        let (r0, c0) = band.origin(128, 128);
        for v in y.slice(s![r0..r0 + 128, c0..c0 + 128]).iter() {
            assert_abs_diff_eq!(*v, 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_regroup_255_fails() {
    let x = Array2::<f64>::zeros((255, 255));
    let err = regroup(&x, 8).unwrap_err();
    assert!(matches!(err, Sf2Error::DimensionMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: 255x255 is not a multiple of 8x8"
    );
}

#[test]
fn test_non_power_of_two_sizes() {
    let x = Array2::from_shape_fn((24, 40), |(r, c)| (r as f64 - c as f64) * 0.5);
    let z = idct(&dct(&x, 8).unwrap(), 8).unwrap();
    assert_abs_diff_eq!(rms_error(&x, &z).unwrap(), 0.0, epsilon = 1e-10);

    let z = nlevidwt(&nlevdwt(&x, 3).unwrap(), 3).unwrap();
    assert_abs_diff_eq!(rms_error(&x, &z).unwrap(), 0.0, epsilon = 1e-10);
}

#[test]
fn test_single_pixel_transforms() {
    let x = Array2::from_elem((1, 1), 5.0);
    assert_eq!(dct(&x, 1).unwrap(), x);
    assert_eq!(regroup(&x, 1).unwrap(), x);
    assert!(dwt(&x).is_err());
}

#[test]
fn test_quantdwt_shape_check() {
    let x = Array2::from_shape_fn((256, 256), |(r, c)| ((r ^ c) % 64) as f64);
    let levels = 3;
    let y = nlevdwt(&x, levels).unwrap();
    let steps = SubbandTable::uniform(levels, 10.0);
    let (_, entropy) = quantdwt(&y, &steps).unwrap();
    assert_eq!(entropy.shape(), (3, levels + 1));
    assert_eq!(entropy.get(1, levels), 0.0);
    assert_eq!(entropy.get(2, levels), 0.0);
}

#[test]
fn test_quantdwt_rejects_deep_table() {
    let y = Array2::<f64>::zeros((40, 40));
    let steps = SubbandTable::uniform(4, 10.0);
    assert!(matches!(
        quantdwt(&y, &steps),
        Err(Sf2Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_energy_probe_domain() {
    assert!(energy_z(4, 4, 0).unwrap() > 0.0);
    assert!(matches!(
        energy_z(4, 4, 2),
        Err(Sf2Error::InvalidSubband { levels: 4, layer: 4, index: 2 })
    ));
    assert!(energy_z(4, 5, 0).is_err());
}

#[test]
fn test_energy_probe_custom_size() {
    let small = energy_z_sized((64, 64), 2, 0, 2).unwrap();
    let full = energy_z(2, 0, 2).unwrap();
    // the finest HH impulse sits far from the edges in both sizes
    assert_abs_diff_eq!(small, full, epsilon = 1e-9);
}

//! # SF2 - block-DCT and wavelet image compression primitives
//!
//! Transform, quantise and cost a single image plane held in an
//! `ndarray::Array2<f64>`.
//!
//! ## Quick Start
//!
//! ### Block DCT
//!
//! ```
//! use ndarray::Array2;
//! use sf2::{dct, dctbpp, idct, quantise, regroup};
//!
//! let x = Array2::from_shape_fn((64, 64), |(r, c)| (r * c % 13) as f64);
//! let y = dct(&x, 8).unwrap();
//! let yq = quantise(&y, 4.0);
//! let bits = dctbpp(&regroup(&yq, 8).unwrap(), 8).unwrap();
//! let z = idct(&yq, 8).unwrap();
//! assert_eq!(z.dim(), x.dim());
//! assert!(bits > 0.0);
//! ```
//!
//! ### Wavelets
//!
//! ```
//! use ndarray::Array2;
//! use sf2::{DwtCodec, DwtOptions};
//!
//! let x = Array2::from_shape_fn((256, 256), |(r, c)| ((r + c) % 32) as f64);
//! let codec = DwtCodec::new(DwtOptions::new().levels(4).uniform_step(10.0));
//! let out = codec.compress(&x).unwrap();
//! println!("{:.0} bits, rms error {:.2}", out.bits(), out.rms_error(&x).unwrap());
//! ```
//!
//! ## Features
//!
//! - Orthogonal DCT-II / DCT-IV matrices and separable N×N block DCT
//! - Coefficient regrouping into per-frequency sub-images
//! - LeGall 5/3 filter bank with symmetric edge extension
//! - 1-level and multi-level 2-D DWT, per-subband quantisation
//! - First-order entropy bit-cost estimates
//! - Subband impulse-energy probe for step-size weighting

// Re-export core types
pub use sf2_core::{
    consts, BlockSize, EntropyTable, Plane, Sf2Error, Sf2Result, StepTable, Subband,
    SubbandTable,
};

// Re-export transforms
pub use sf2_transform::{
    bpp, colxfm, dct, dct_ii, dct_iv, dctbpp, dwt, dwt_with, energy_z, energy_z_sized, idct,
    idwt, idwt_with, impulse_energies, impulse_energies_sized, nlevdwt, nlevdwt_with, nlevidwt,
    nlevidwt_with, quant1, quant2, quantdwt, quantise, quantise_with_rise, regroup,
    regroup_inverse, rms_error, rowdec, rowdec2, rowint, rowint2, FilterBank, LEGALL_G1,
    LEGALL_G2, LEGALL_H1, LEGALL_H2,
};

// Re-export codecs
pub use sf2_codec::{DctCodec, DctOptions, DctOutput, DwtCodec, DwtOptions, DwtOutput, StepPolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

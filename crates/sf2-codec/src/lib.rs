//! Compression pipelines for block-DCT and wavelet coding
//!
//! Each codec runs forward transform, quantisation, bit-cost estimation and
//! inverse transform over a single image plane, configured through a
//! builder-style options struct.

pub mod dct;
pub mod dwt;

pub use dct::{DctCodec, DctOptions, DctOutput};
pub use dwt::{DwtCodec, DwtOptions, DwtOutput, StepPolicy};

//! Transform operations for SF2 image compression
//!
//! This crate implements the orthogonal DCT matrices and separable block DCT,
//! coefficient regrouping, the row filter bank and the multi-level wavelet
//! transform built on it, scalar quantisation, and first-order entropy
//! estimates used for bit-cost accounting.

pub mod dct;
pub mod dwt;
pub mod entropy;
pub mod filters;
pub mod quantization;
pub mod regroup;

pub use dct::*;
pub use dwt::*;
pub use entropy::*;
pub use filters::*;
pub use quantization::*;
pub use regroup::*;

//! Core types and utilities for the SF2 transform-coding primitives
//!
//! This crate provides the shared data structures used by the transform and
//! codec crates: the error type, block sizes, subband identifiers and the
//! per-subband step/entropy tables.

pub mod consts;
pub mod error;
pub mod types;

pub use error::{Sf2Error, Sf2Result};
pub use types::*;

/// Real-valued image or coefficient plane, indexed `[row, col]`
pub type Plane = ndarray::Array2<f64>;

//! Constants used throughout the transform and codec crates

/// Working size of the course test images (square)
pub const DEFAULT_IMAGE_SIZE: usize = 256;

/// Default block DCT size
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Default number of wavelet decomposition levels
pub const DEFAULT_DWT_LEVELS: usize = 4;

/// Default quantisation step for block DCT coefficients
pub const DEFAULT_DCT_STEP: f64 = 17.0;

/// Default uniform quantisation step for wavelet subbands
pub const DEFAULT_DWT_STEP: f64 = 10.0;

/// Detail orientations per decomposition level (LH, HL, HH)
pub const NUM_ORIENTATIONS: usize = 3;

/// Amplitude of the impulse placed by the subband energy probe
pub const IMPULSE_MAGNITUDE: f64 = 100.0;

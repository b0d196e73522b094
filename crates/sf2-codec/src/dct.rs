//! Block-DCT codec

use log::debug;
use ndarray::{ArrayBase, Data, Ix2};
use sf2_core::{consts, Plane, Sf2Error, Sf2Result};
use sf2_transform::{dct, dctbpp, idct, quantise, quantise_with_rise, regroup, rms_error};

/// Block-DCT codec options
#[derive(Debug, Clone, PartialEq)]
pub struct DctOptions {
    /// Side of the square transform block
    pub block_size: usize,
    /// Quantisation step for every coefficient (0 disables quantisation)
    pub step: f64,
    /// Edge of the zero bin; `None` means `step / 2`
    pub rise: Option<f64>,
}

impl Default for DctOptions {
    fn default() -> Self {
        Self {
            block_size: consts::DEFAULT_BLOCK_SIZE,
            step: consts::DEFAULT_DCT_STEP,
            rise: None,
        }
    }
}

impl DctOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn rise(mut self, rise: f64) -> Self {
        self.rise = Some(rise);
        self
    }
}

/// Result of compressing one plane with [`DctCodec`]
#[derive(Debug, Clone)]
pub struct DctOutput {
    /// Block-DCT coefficients before quantisation
    pub coefficients: Plane,
    /// Quantised coefficients
    pub quantised: Plane,
    /// Estimated bits for the quantised coefficients
    pub bits: f64,
    /// Inverse DCT of the quantised coefficients
    pub reconstruction: Plane,
}

impl DctOutput {
    pub fn bits_per_pixel(&self) -> f64 {
        self.bits / self.quantised.len().max(1) as f64
    }

    /// RMS difference between `original` and the reconstruction
    pub fn rms_error<S: Data<Elem = f64>>(&self, original: &ArrayBase<S, Ix2>) -> Sf2Result<f64> {
        rms_error(original, &self.reconstruction)
    }
}

/// Block-DCT codec
#[derive(Debug, Clone, Default)]
pub struct DctCodec {
    options: DctOptions,
}

impl DctCodec {
    pub fn new(options: DctOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DctOptions {
        &self.options
    }

    /// Transform, quantise, cost and reconstruct `x`
    pub fn compress<S: Data<Elem = f64>>(&self, x: &ArrayBase<S, Ix2>) -> Sf2Result<DctOutput> {
        let n = self.options.block_size;
        if n == 0 {
            return Err(Sf2Error::InvalidTransformSize(n));
        }

        let coefficients = dct(x, n)?;
        let quantised = match self.options.rise {
            Some(rise) => quantise_with_rise(&coefficients, self.options.step, rise),
            None => quantise(&coefficients, self.options.step),
        };
        let bits = dctbpp(&regroup(&quantised, n)?, n)?;
        let reconstruction = idct(&quantised, n)?;

        debug!(
            "dct codec {}x{} N={} step={}: {:.0} bits",
            x.nrows(),
            x.ncols(),
            n,
            self.options.step,
            bits
        );

        Ok(DctOutput {
            coefficients,
            quantised,
            bits,
            reconstruction,
        })
    }
}

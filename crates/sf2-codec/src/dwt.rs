//! Multi-level wavelet codec

use log::debug;
use ndarray::{ArrayBase, Data, Ix2};
use sf2_core::{consts, EntropyTable, Plane, Sf2Error, Sf2Result, StepTable, SubbandTable};
use sf2_transform::{nlevdwt_with, nlevidwt_with, quantdwt, rms_error, FilterBank};

/// How quantisation steps are assigned to subbands
#[derive(Debug, Clone, PartialEq)]
pub enum StepPolicy {
    /// Same step for every subband
    Uniform(f64),
    /// Explicit `(3, levels + 1)` step table
    Table(StepTable),
}

impl Default for StepPolicy {
    fn default() -> Self {
        StepPolicy::Uniform(consts::DEFAULT_DWT_STEP)
    }
}

/// Wavelet codec options
#[derive(Debug, Clone, PartialEq)]
pub struct DwtOptions {
    /// Number of decomposition levels
    pub levels: usize,
    /// Per-subband quantisation steps
    pub steps: StepPolicy,
    /// Analysis and synthesis filters
    pub filters: FilterBank,
}

impl Default for DwtOptions {
    fn default() -> Self {
        Self {
            levels: consts::DEFAULT_DWT_LEVELS,
            steps: StepPolicy::default(),
            filters: FilterBank::legall(),
        }
    }
}

impl DwtOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn uniform_step(mut self, step: f64) -> Self {
        self.steps = StepPolicy::Uniform(step);
        self
    }

    /// Use an explicit step table; also sets the depth to match it
    pub fn step_table(mut self, table: StepTable) -> Self {
        self.levels = table.levels();
        self.steps = StepPolicy::Table(table);
        self
    }

    pub fn filters(mut self, filters: FilterBank) -> Self {
        self.filters = filters;
        self
    }

    /// Resolve the step policy into a table for `self.levels`
    pub fn resolve_steps(&self) -> Sf2Result<StepTable> {
        match &self.steps {
            StepPolicy::Uniform(step) => Ok(SubbandTable::uniform(self.levels, *step)),
            StepPolicy::Table(table) if table.levels() == self.levels => Ok(table.clone()),
            StepPolicy::Table(table) => {
                let (rows, cols) = table.shape();
                Err(Sf2Error::InvalidStepTable { rows, cols })
            }
        }
    }
}

/// Result of compressing one plane with [`DwtCodec`]
#[derive(Debug, Clone)]
pub struct DwtOutput {
    /// Multi-level DWT before quantisation
    pub coefficients: Plane,
    /// Quantised DWT
    pub quantised: Plane,
    /// Estimated bits per subband
    pub entropy: EntropyTable,
    /// Inverse DWT of the quantised coefficients
    pub reconstruction: Plane,
}

impl DwtOutput {
    /// Total estimated bits over all subbands
    pub fn bits(&self) -> f64 {
        self.entropy.total()
    }

    pub fn bits_per_pixel(&self) -> f64 {
        self.bits() / self.quantised.len().max(1) as f64
    }

    /// RMS difference between `original` and the reconstruction
    pub fn rms_error<S: Data<Elem = f64>>(&self, original: &ArrayBase<S, Ix2>) -> Sf2Result<f64> {
        rms_error(original, &self.reconstruction)
    }
}

/// Multi-level wavelet codec
#[derive(Debug, Clone, Default)]
pub struct DwtCodec {
    options: DwtOptions,
}

impl DwtCodec {
    pub fn new(options: DwtOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DwtOptions {
        &self.options
    }

    /// Decompose, quantise per subband, cost and reconstruct `x`
    pub fn compress<S: Data<Elem = f64>>(&self, x: &ArrayBase<S, Ix2>) -> Sf2Result<DwtOutput> {
        let steps = self.options.resolve_steps()?;
        let levels = self.options.levels;
        let filters = &self.options.filters;

        let coefficients = nlevdwt_with(x, levels, filters)?;
        let (quantised, entropy) = quantdwt(&coefficients, &steps)?;
        let reconstruction = nlevidwt_with(&quantised, levels, filters)?;

        debug!(
            "dwt codec {}x{} levels={}: {:.0} bits",
            x.nrows(),
            x.ncols(),
            levels,
            entropy.total()
        );

        Ok(DwtOutput {
            coefficients,
            quantised,
            entropy,
            reconstruction,
        })
    }
}

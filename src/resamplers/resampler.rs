use crate::core::{Dataset, Result};
use crate::reporting::ResamplingReport;
use crate::resamplers::ResamplerSettings;

pub struct ResampleOutcome {
    pub dataset: Dataset,
    pub report: ResamplingReport,
}

/// A class-rebalancing algorithm.
///
/// Implementations never modify the input; every call builds its own
/// buffers and returns a fresh dataset. With a fixed seed, repeated calls on
/// the same input produce identical output.
pub trait Resampler {
    fn name(&self) -> &'static str;

    fn settings(&self) -> &ResamplerSettings;

    fn resample(&self, dataset: &Dataset) -> Result<ResampleOutcome>;
}

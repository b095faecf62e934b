use crate::core::{Dataset, ResampleError, Result};
use crate::resamplers::smote::{smote_stage, validate_percent};
use crate::resamplers::{ResampleOutcome, Resampler, ResamplerSettings, Run};
use crate::undersampling::PruningRule;
use tracing::debug;

pub const DEFAULT_ENN_K: usize = 3;

/// SMOTE oversampling followed by edited-nearest-neighbor cleaning of the
/// combined rows. Minority rows, synthetic ones included, are never removed.
#[derive(Debug, Clone)]
pub struct SmoteEnn {
    settings: ResamplerSettings,
    percent: u32,
    enn_k: usize,
}

impl SmoteEnn {
    pub fn new(settings: ResamplerSettings, percent: u32, enn_k: usize) -> Result<Self> {
        settings.validate()?;
        validate_percent(percent)?;
        if enn_k == 0 {
            return Err(ResampleError::config(
                "cleaning neighbor count must be a positive integer",
            ));
        }
        Ok(Self {
            settings,
            percent,
            enn_k,
        })
    }
}

impl Resampler for SmoteEnn {
    fn name(&self) -> &'static str {
        "smote-enn"
    }

    fn settings(&self) -> &ResamplerSettings {
        &self.settings
    }

    fn resample(&self, dataset: &Dataset) -> Result<ResampleOutcome> {
        let mut run = Run::start(self.name(), &self.settings, dataset)?;
        let added = smote_stage(&mut run, self.percent)?;
        let marks = PruningRule::NeighborVote { k: self.enn_k }.marks(
            &run.search(),
            run.labels(),
            run.minority(),
        )?;
        debug!(
            synthesized = added,
            marked = marks.iter().filter(|&&m| m).count(),
            "cleaning pass done"
        );
        run.finish(Some(marks))
    }
}

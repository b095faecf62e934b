use crate::core::{Dataset, Result};
use crate::resamplers::{ResampleOutcome, Resampler, ResamplerSettings, Run};
use crate::undersampling::PruningRule;

/// Edited nearest neighbors: removes every non-minority row whose `k`
/// nearest neighbors do not vote for its own label.
#[derive(Debug, Clone)]
pub struct EditedNearestNeighbors {
    settings: ResamplerSettings,
}

impl EditedNearestNeighbors {
    pub fn new(settings: ResamplerSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }
}

impl Resampler for EditedNearestNeighbors {
    fn name(&self) -> &'static str {
        "enn"
    }

    fn settings(&self) -> &ResamplerSettings {
        &self.settings
    }

    fn resample(&self, dataset: &Dataset) -> Result<ResampleOutcome> {
        let run = Run::start(self.name(), &self.settings, dataset)?;
        let marks = PruningRule::NeighborVote { k: run.k() }.marks(
            &run.search(),
            run.labels(),
            run.minority(),
        )?;
        run.finish(Some(marks))
    }
}

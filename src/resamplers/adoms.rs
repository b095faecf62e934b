use crate::core::{Dataset, Result};
use crate::oversampling::Generator;
use crate::resamplers::smote::validate_percent;
use crate::resamplers::{ResampleOutcome, Resampler, ResamplerSettings, Run};

/// Oversampling along the first principal axis of each minority row's
/// neighborhood. Needs at least two minority neighbors per row.
#[derive(Debug, Clone)]
pub struct Adoms {
    settings: ResamplerSettings,
    percent: u32,
}

impl Adoms {
    pub fn new(settings: ResamplerSettings, percent: u32) -> Result<Self> {
        settings.validate()?;
        validate_percent(percent)?;
        Ok(Self { settings, percent })
    }
}

impl Resampler for Adoms {
    fn name(&self) -> &'static str {
        "adoms"
    }

    fn settings(&self) -> &ResamplerSettings {
        &self.settings
    }

    fn resample(&self, dataset: &Dataset) -> Result<ResampleOutcome> {
        let mut run = Run::start(self.name(), &self.settings, dataset)?;
        let minority = run.minority_indices();
        let hoods = run.neighborhoods(&minority, &minority, run.k())?;
        let counts = vec![(self.percent / 100) as usize; hoods.len()];
        run.synthesize(Generator::PrincipalAxis, &hoods, &counts)?;
        run.finish(None)
    }
}

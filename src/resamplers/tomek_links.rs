use crate::core::{Dataset, Result};
use crate::resamplers::{ResampleOutcome, Resampler, ResamplerSettings, Run};
use crate::undersampling::PruningRule;

/// Removes both rows of every Tomek link.
#[derive(Debug, Clone)]
pub struct TomekLinks {
    settings: ResamplerSettings,
}

impl TomekLinks {
    pub fn new(settings: ResamplerSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }
}

impl Resampler for TomekLinks {
    fn name(&self) -> &'static str {
        "tomek-links"
    }

    fn settings(&self) -> &ResamplerSettings {
        &self.settings
    }

    fn resample(&self, dataset: &Dataset) -> Result<ResampleOutcome> {
        let run = Run::start(self.name(), &self.settings, dataset)?;
        let marks = PruningRule::TomekLink.marks(&run.search(), run.labels(), run.minority())?;
        run.finish(Some(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{MAJORITY, MINORITY, header_numeric, overlapping};

    #[test]
    fn drops_both_sides_of_the_boundary_pair() {
        let features = vec![
            vec![0.0],
            vec![0.1],
            vec![0.45],
            vec![0.55],
            vec![0.9],
            vec![1.0],
            vec![0.95],
        ];
        let labels = vec![MINORITY, MINORITY, MINORITY, MAJORITY, MAJORITY, MAJORITY, MAJORITY];
        let ds = Dataset::new(header_numeric(1), features, labels).unwrap();
        let out = TomekLinks::new(ResamplerSettings::new().with_seed(1))
            .unwrap()
            .resample(&ds)
            .unwrap();
        assert_eq!(out.report.removed, vec![2, 3]);
        assert_eq!(
            out.dataset.features(),
            &vec![vec![0.0], vec![0.1], vec![0.9], vec![1.0], vec![0.95]]
        );
    }

    #[test]
    fn removals_come_in_cross_class_pairs() {
        let ds = overlapping(10, 40, 6, 8);
        let out = TomekLinks::new(ResamplerSettings::new().with_seed(1))
            .unwrap()
            .resample(&ds)
            .unwrap();
        let removed = &out.report.removed;
        assert_eq!(removed.len() % 2, 0);
        let removed_minority = removed
            .iter()
            .filter(|&&i| ds.label(i) == Some(MINORITY))
            .count();
        assert_eq!(removed_minority * 2, removed.len());

        let again = TomekLinks::new(ResamplerSettings::new().with_seed(99))
            .unwrap()
            .resample(&ds)
            .unwrap();
        assert_eq!(&again.report.removed, removed);
    }
}

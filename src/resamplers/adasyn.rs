use crate::core::{Dataset, Result};
use crate::neighbors::NeighborSearch;
use crate::oversampling::{DensityWeighting, Generator};
use crate::resamplers::{ResampleOutcome, Resampler, ResamplerSettings, Run};
use tracing::warn;

pub const DEFAULT_BALANCE_LEVEL: f64 = 1.0;
pub const DEFAULT_IMBALANCE_THRESHOLD: f64 = 0.75;

/// Adaptive synthetic sampling: minority rows surrounded by other classes
/// seed proportionally more synthetic rows.
#[derive(Debug, Clone)]
pub struct Adasyn {
    settings: ResamplerSettings,
    weighting: DensityWeighting,
}

impl Adasyn {
    pub fn new(
        settings: ResamplerSettings,
        balance_level: f64,
        imbalance_threshold: f64,
    ) -> Result<Self> {
        settings.validate()?;
        let weighting = DensityWeighting::new(balance_level, imbalance_threshold)?;
        Ok(Self {
            settings,
            weighting,
        })
    }

    pub fn weighting(&self) -> &DensityWeighting {
        &self.weighting
    }
}

fn difficulty_ratios(
    search: &NeighborSearch<'_>,
    labels: &[usize],
    seeds: &[usize],
    k: usize,
    minority: usize,
) -> Result<Vec<f64>> {
    seeds
        .iter()
        .map(|&seed| {
            let neighbors = search.nearest(seed, k)?;
            Ok(DensityWeighting::difficulty(
                neighbors.iter().map(|n| labels[n.index]),
                minority,
            ))
        })
        .collect()
}

impl Resampler for Adasyn {
    fn name(&self) -> &'static str {
        "adasyn"
    }

    fn settings(&self) -> &ResamplerSettings {
        &self.settings
    }

    fn resample(&self, dataset: &Dataset) -> Result<ResampleOutcome> {
        let mut run = Run::start(self.name(), &self.settings, dataset)?;
        let counts = dataset.class_counts();
        let minority_count = counts.get(run.minority());
        let majority_count = counts.largest_count_excluding(run.minority());

        if !self.weighting.is_imbalanced(minority_count, majority_count) {
            warn!(
                minority = minority_count,
                majority = majority_count,
                threshold = self.weighting.imbalance_threshold(),
                "class ratio above imbalance threshold, nothing synthesized"
            );
            return run.finish(None);
        }

        let budget = self.weighting.budget(majority_count, minority_count);
        let seeds = run.minority_indices();
        let ratios = difficulty_ratios(
            &run.search(),
            run.labels(),
            &seeds,
            run.k(),
            run.minority(),
        )?;
        let per_seed = DensityWeighting::allocate(&ratios, budget);
        let hoods = run.neighborhoods(&seeds, &seeds, run.k())?;
        run.synthesize(Generator::DensityWeighted(self.weighting), &hoods, &per_seed)?;
        run.finish(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResampleError;
    use crate::testing::dummies::{MAJORITY, MINORITY, blobs, overlapping};

    #[test]
    fn parameter_ranges_are_checked() {
        let s = ResamplerSettings::new();
        assert!(matches!(
            Adasyn::new(s.clone(), 1.5, 0.5).unwrap_err(),
            ResampleError::Config(_)
        ));
        assert!(matches!(
            Adasyn::new(s.clone(), 0.5, 0.0).unwrap_err(),
            ResampleError::Config(_)
        ));
        assert!(Adasyn::new(s, 0.0, 1.0).is_ok());
    }

    #[test]
    fn synthesized_total_stays_within_budget() {
        let ds = overlapping(10, 40, 5, 13);
        for level in [0.0, 0.25, 0.5, 1.0] {
            let adasyn = Adasyn::new(
                ResamplerSettings::new().with_k(5).with_seed(42),
                level,
                1.0,
            )
            .unwrap();
            let out = adasyn.resample(&ds).unwrap();
            let budget = ((40.0 - 10.0) * level).round() as usize;
            let made = out.report.created.len();
            assert!(made <= budget, "level={level} made={made}");
            assert!(made + 10 >= budget, "level={level} made={made}");
            assert_eq!(out.dataset.class_counts().get(MINORITY), 10 + made);
            assert_eq!(out.dataset.class_counts().get(MAJORITY), 40);
        }
    }

    #[test]
    fn balanced_enough_data_is_returned_unchanged() {
        let ds = blobs(30, 40, 2);
        let adasyn = Adasyn::new(ResamplerSettings::new().with_seed(1), 1.0, 0.5).unwrap();
        let out = adasyn.resample(&ds).unwrap();
        assert_eq!(out.dataset.features(), ds.features());
        assert!(out.report.created.is_empty());
    }

    #[test]
    fn reruns_match() {
        let ds = overlapping(10, 40, 5, 13);
        let adasyn = Adasyn::new(ResamplerSettings::new().with_seed(77), 1.0, 1.0).unwrap();
        let a = adasyn.resample(&ds).unwrap();
        let b = adasyn.resample(&ds).unwrap();
        assert_eq!(a.dataset.features(), b.dataset.features());
    }
}

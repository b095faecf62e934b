use crate::core::{Dataset, ResampleError, Result};
use crate::oversampling::Generator;
use crate::resamplers::{ResampleOutcome, Resampler, ResamplerSettings, Run};

pub const DEFAULT_PERCENT: u32 = 100;

pub(crate) fn validate_percent(percent: u32) -> Result<()> {
    if percent == 0 || percent % 100 != 0 {
        return Err(ResampleError::config(format!(
            "oversampling percentage must be a positive multiple of 100, got {percent}"
        )));
    }
    Ok(())
}

/// `percent / 100` uniform interpolations from every minority row toward
/// random members of its `k` nearest minority neighbors.
pub(crate) fn smote_stage(run: &mut Run<'_>, percent: u32) -> Result<usize> {
    let minority = run.minority_indices();
    let hoods = run.neighborhoods(&minority, &minority, run.k())?;
    let counts = vec![(percent / 100) as usize; hoods.len()];
    run.synthesize(Generator::Uniform, &hoods, &counts)
}

/// Synthetic Minority Over-sampling Technique.
#[derive(Debug, Clone)]
pub struct Smote {
    settings: ResamplerSettings,
    percent: u32,
}

impl Smote {
    pub fn new(settings: ResamplerSettings, percent: u32) -> Result<Self> {
        settings.validate()?;
        validate_percent(percent)?;
        Ok(Self { settings, percent })
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }
}

impl Resampler for Smote {
    fn name(&self) -> &'static str {
        "smote"
    }

    fn settings(&self) -> &ResamplerSettings {
        &self.settings
    }

    fn resample(&self, dataset: &Dataset) -> Result<ResampleOutcome> {
        let mut run = Run::start(self.name(), &self.settings, dataset)?;
        smote_stage(&mut run, self.percent)?;
        run.finish(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MinorityPolicy;
    use crate::distance::{DistanceContext, DistanceMetric};
    use crate::neighbors::NeighborSearch;
    use crate::preprocessing::normalize;
    use crate::testing::dummies::{
        MAJORITY, MINORITY, blobs, header_numeric, header_with_nominal, mixed,
    };
    use std::fs;
    use tempfile::tempdir;

    /// Whether `row` lies in the bounding box of some minority row and one
    /// of its `k` nearest minority neighbors.
    fn inside_some_neighbor_box(ds: &Dataset, row: &[f64], k: usize, tol: f64) -> bool {
        let pool = normalize(ds);
        let ctx = DistanceContext::build(ds.header(), &pool, ds.labels()).unwrap();
        let search = NeighborSearch::new(&pool, DistanceMetric::Euclidean, &ctx);
        let minority = ds.indices_of_label(MINORITY);
        minority.iter().any(|&s| {
            let hood = search
                .nearest_among(s, minority.iter().copied(), k)
                .unwrap();
            hood.iter().any(|nb| {
                let a = ds.row(s).unwrap();
                let b = ds.row(nb.index).unwrap();
                (0..row.len())
                    .all(|j| row[j] >= a[j].min(b[j]) - tol && row[j] <= a[j].max(b[j]) + tol)
            })
        })
    }

    #[test]
    fn percent_must_be_positive_multiple_of_hundred() {
        for bad in [0, 50, 150, 250] {
            let err = Smote::new(ResamplerSettings::new(), bad).unwrap_err();
            assert!(matches!(err, ResampleError::Config(_)), "percent={bad}");
        }
        assert!(Smote::new(ResamplerSettings::new(), 300).is_ok());
        assert!(Smote::new(ResamplerSettings::new().with_k(0), 100).is_err());
    }

    #[test]
    fn precision_beyond_ten_places_is_rejected() {
        let err = Smote::new(ResamplerSettings::new().with_precision(11), 100).unwrap_err();
        assert!(matches!(err, ResampleError::Config(_)));
        assert!(Smote::new(ResamplerSettings::new().with_precision(10), 100).is_ok());
    }

    #[test]
    fn two_hundred_percent_doubles_minority_inside_neighbor_boxes() {
        let ds = blobs(10, 40, 17);
        let settings = ResamplerSettings::new().with_k(3).with_seed(42);
        let smote = Smote::new(settings, 200).unwrap();
        let out = smote.resample(&ds).unwrap();

        assert_eq!(out.dataset.len(), 70);
        assert_eq!(out.report.created, (50..70).collect::<Vec<_>>());
        assert!(out.report.removed.is_empty());
        assert_eq!(&out.dataset.features()[..50], &ds.features()[..]);

        let counts = out.dataset.class_counts();
        assert_eq!(counts.get(MINORITY), 30);
        assert_eq!(counts.get(MAJORITY), 40);

        for &pos in &out.report.created {
            assert_eq!(out.dataset.label(pos), Some(MINORITY));
            let row = out.dataset.row(pos).unwrap();
            assert!(inside_some_neighbor_box(&ds, row, 3, 0.005 + 1e-9), "row={row:?}");
        }

        let mut sources = out.report.sources.clone();
        sources.sort_unstable();
        let expected: Vec<usize> = (0..10).flat_map(|i| [i, i]).collect();
        assert_eq!(sources, expected);
    }

    #[test]
    fn same_seed_reproduces_rows_bit_for_bit() {
        let ds = blobs(10, 40, 17);
        let smote = Smote::new(ResamplerSettings::new().with_k(3).with_seed(42), 200).unwrap();
        let a = smote.resample(&ds).unwrap();
        let b = smote.resample(&ds).unwrap();
        assert_eq!(a.dataset.features(), b.dataset.features());
        assert_eq!(a.dataset.labels(), b.dataset.labels());

        let other = Smote::new(ResamplerSettings::new().with_k(3).with_seed(43), 200).unwrap();
        let c = other.resample(&ds).unwrap();
        assert_ne!(a.dataset.features(), c.dataset.features());
    }

    #[test]
    fn synthetic_values_follow_input_precision() {
        let ds = blobs(6, 12, 4);
        let out = Smote::new(ResamplerSettings::new().with_k(3).with_seed(1), 100)
            .unwrap()
            .resample(&ds)
            .unwrap();
        for &pos in &out.report.created {
            for &v in out.dataset.row(pos).unwrap() {
                assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6, "v={v}");
            }
        }

        let out = Smote::new(
            ResamplerSettings::new().with_k(3).with_seed(1).with_precision(0),
            100,
        )
        .unwrap()
        .resample(&ds)
        .unwrap();
        for &pos in &out.report.created {
            assert!(out.dataset.row(pos).unwrap().iter().all(|v| v.fract() == 0.0));
        }
    }

    #[test]
    fn hvdm_with_nominal_features_keeps_valid_codes() {
        let ds = mixed();
        let settings = ResamplerSettings::new()
            .with_k(2)
            .with_seed(8)
            .with_metric(DistanceMetric::Hvdm);
        let out = Smote::new(settings, 100).unwrap().resample(&ds).unwrap();
        assert_eq!(out.report.created.len(), 4);

        let (header, features, labels) = out.dataset.clone().into_parts();
        assert!(Dataset::new(header, features, labels).is_ok());
        for &pos in &out.report.created {
            assert!(out.dataset.nominal_value(pos, 1).is_some());
        }
    }

    #[test]
    fn nominal_codes_come_from_a_parent() {
        // minority rows are only red (0) or blue (2)
        let features = vec![
            vec![1.0, 0.0],
            vec![1.1, 2.0],
            vec![1.2, 0.0],
            vec![0.9, 2.0],
            vec![5.0, 1.0],
            vec![5.1, 1.0],
            vec![5.2, 0.0],
            vec![4.9, 2.0],
            vec![5.3, 1.0],
        ];
        let labels = vec![
            MINORITY, MINORITY, MINORITY, MINORITY, MAJORITY, MAJORITY, MAJORITY, MAJORITY,
            MAJORITY,
        ];
        let ds = Dataset::new(header_with_nominal(), features, labels).unwrap();
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Hvdm] {
            let settings = ResamplerSettings::new()
                .with_k(3)
                .with_seed(11)
                .with_metric(metric);
            let out = Smote::new(settings, 500).unwrap().resample(&ds).unwrap();
            assert_eq!(out.report.created.len(), 20);
            for &pos in &out.report.created {
                let color = out.dataset.nominal_value(pos, 1);
                assert!(matches!(color, Some("red") | Some("blue")), "{metric}: {color:?}");
            }
        }
    }

    #[test]
    fn lone_minority_row_has_no_neighbors() {
        let features = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![0.9, 1.0]];
        let ds = Dataset::new(header_numeric(2), features, vec![MINORITY, MAJORITY, MAJORITY]).unwrap();
        let err = Smote::new(ResamplerSettings::new().with_seed(1), 100)
            .unwrap()
            .resample(&ds)
            .err()
            .unwrap();
        assert!(matches!(err, ResampleError::InsufficientNeighbors { .. }));
    }

    #[test]
    fn pinned_label_is_oversampled_instead() {
        let ds = blobs(4, 6, 3);
        let settings = ResamplerSettings::new()
            .with_seed(5)
            .with_k(3)
            .with_minority(MinorityPolicy::Pinned(MAJORITY));
        let out = Smote::new(settings, 100).unwrap().resample(&ds).unwrap();
        assert_eq!(out.dataset.class_counts().get(MAJORITY), 12);
        assert_eq!(out.dataset.class_counts().get(MINORITY), 4);
    }

    #[test]
    fn log_path_receives_the_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("smote.log");
        let settings = ResamplerSettings::new()
            .with_seed(2)
            .with_k(3)
            .with_log_path(path.clone());
        let out = Smote::new(settings, 100).unwrap().resample(&blobs(5, 20, 2)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("algorithm: smote"));
        assert!(content.contains(&format!("created ({})", out.report.created.len())));
    }

    #[test]
    fn unwritable_log_path_still_returns_the_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("smote.log");
        let settings = ResamplerSettings::new()
            .with_seed(2)
            .with_k(3)
            .with_log_path(path.clone());
        let out = Smote::new(settings, 100).unwrap().resample(&blobs(5, 20, 2)).unwrap();
        assert_eq!(out.report.created.len(), 5);
        assert!(!path.exists());
    }
}

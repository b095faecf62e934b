use crate::core::{Dataset, Matrix, ResampleError, Result};
use crate::distance::DistanceContext;
use crate::neighbors::NeighborSearch;
use crate::oversampling::{Generator, SeedNeighborhood};
use crate::preprocessing::{AttributeRanges, Precision, attribute_ranges, round_to};
use crate::reporting::ResamplingReport;
use crate::resamplers::{ResampleOutcome, ResamplerSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Short-lived state of one algorithm invocation.
///
/// The pool holds the input rows in metric space (normalized for Euclidean,
/// raw for HVDM) followed by any synthetic rows. Rows are processed in input
/// order; neighbor ties resolve by pool index.
pub(crate) struct Run<'a> {
    algorithm: &'static str,
    settings: &'a ResamplerSettings,
    dataset: &'a Dataset,
    started: Instant,
    seed: u64,
    rng: StdRng,
    ranges: Option<AttributeRanges>,
    pool: Matrix,
    labels: Vec<usize>,
    /// Input row each synthetic pool row was seeded from.
    sources: Vec<usize>,
    nominal: Vec<bool>,
    context: DistanceContext,
    minority: usize,
}

impl<'a> Run<'a> {
    pub fn start(
        algorithm: &'static str,
        settings: &'a ResamplerSettings,
        dataset: &'a Dataset,
    ) -> Result<Self> {
        let started = Instant::now();
        settings.validate()?;
        if dataset.is_empty() {
            return Err(ResampleError::config("cannot resample an empty dataset"));
        }
        let minority = settings
            .minority
            .resolve(&dataset.class_counts(), dataset.header())?;
        let seed = settings.resolved_seed();

        let (pool, ranges) = if settings.metric.needs_normalization() {
            let ranges = attribute_ranges(dataset);
            let pool = dataset
                .features()
                .iter()
                .map(|row| ranges.normalize_row(row))
                .collect();
            (pool, Some(ranges))
        } else {
            (dataset.features().clone(), None)
        };
        let labels = dataset.labels().to_vec();
        let context = DistanceContext::build(dataset.header(), &pool, &labels)?;

        debug!(
            algorithm,
            rows = dataset.len(),
            features = dataset.number_of_features(),
            metric = %settings.metric,
            minority,
            seed,
            "run prepared"
        );

        Ok(Self {
            algorithm,
            settings,
            dataset,
            started,
            seed,
            rng: StdRng::seed_from_u64(seed),
            ranges,
            pool,
            labels,
            sources: Vec::new(),
            nominal: dataset.header().nominal_mask(),
            context,
            minority,
        })
    }

    pub fn k(&self) -> usize {
        self.settings.k
    }

    pub fn minority(&self) -> usize {
        self.minority
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn search(&self) -> NeighborSearch<'_> {
        NeighborSearch::new(&self.pool, self.settings.metric, &self.context)
    }

    /// Input rows carrying the minority label.
    pub fn minority_indices(&self) -> Vec<usize> {
        self.dataset.indices_of_label(self.minority)
    }

    /// Neighborhood of every seed, drawn from `candidates` only.
    pub fn neighborhoods(
        &self,
        seeds: &[usize],
        candidates: &[usize],
        k: usize,
    ) -> Result<Vec<SeedNeighborhood>> {
        let search = self.search();
        seeds
            .iter()
            .map(|&seed| {
                Ok(SeedNeighborhood {
                    seed,
                    neighbors: search.nearest_among(seed, candidates.iter().copied(), k)?,
                })
            })
            .collect()
    }

    /// Generates minority rows and appends them to the pool. Returns how many
    /// rows were added.
    pub fn synthesize(
        &mut self,
        generator: Generator,
        neighborhoods: &[SeedNeighborhood],
        counts: &[usize],
    ) -> Result<usize> {
        let buffer = generator.generate(
            &self.pool,
            &self.nominal,
            neighborhoods,
            counts,
            &mut self.rng,
        )?;
        let (rows, sources) = buffer.finish()?;
        let added = rows.len();
        if added == 0 {
            return Ok(0);
        }
        self.pool.extend(rows);
        self.sources.extend(sources);
        self.labels.extend(std::iter::repeat_n(self.minority, added));
        self.context = DistanceContext::build(self.dataset.header(), &self.pool, &self.labels)?;
        Ok(added)
    }

    /// Maps a synthetic pool row back to the input's units: denormalized,
    /// rounded, nominal codes snapped to the value table.
    fn output_row(&self, row: &[f64], precision: &Precision) -> Vec<f64> {
        let header = self.dataset.header();
        let raw = match &self.ranges {
            Some(ranges) => ranges.denormalize_row(row),
            None => row.to_vec(),
        };
        raw.into_iter()
            .enumerate()
            .map(|(j, v)| match header.nominal_feature(j) {
                Some(nominal) => nominal.snap_code(v),
                None => round_to(v, precision.decimals(j)),
            })
            .collect()
    }

    /// Builds the output: surviving input rows in input order, then
    /// surviving synthetic rows in generation order. `marks` flags pool rows
    /// to drop; `None` keeps everything.
    pub fn finish(self, marks: Option<Vec<bool>>) -> Result<ResampleOutcome> {
        let marks = marks.unwrap_or_else(|| vec![false; self.pool.len()]);
        if marks.len() != self.pool.len() {
            return Err(ResampleError::DimensionMismatch {
                expected: self.pool.len(),
                found: marks.len(),
            });
        }

        let original = self.dataset.len();
        let precision = Precision::for_dataset(self.settings.precision, self.dataset);
        let mut features = Vec::with_capacity(self.pool.len());
        let mut labels = Vec::with_capacity(self.pool.len());
        let mut created = Vec::new();
        let mut sources = Vec::new();
        let mut removed = Vec::new();

        for (i, (row, &label)) in self
            .dataset
            .features()
            .iter()
            .zip(self.dataset.labels())
            .enumerate()
        {
            if marks[i] {
                removed.push(i);
            } else {
                features.push(row.clone());
                labels.push(label);
            }
        }
        for i in original..self.pool.len() {
            if marks[i] {
                continue;
            }
            created.push(features.len());
            sources.push(self.sources[i - original]);
            features.push(self.output_row(&self.pool[i], &precision));
            labels.push(self.labels[i]);
        }

        let result = Dataset::from_parts(self.dataset.shared_header(), features, labels);
        let report = ResamplingReport::new(
            self.algorithm,
            self.seed,
            self.dataset,
            &result,
            self.started.elapsed(),
            created,
            removed,
        )
        .with_sources(sources);
        info!(
            algorithm = self.algorithm,
            rows_before = original,
            rows_after = result.len(),
            created = report.created.len(),
            removed = report.removed.len(),
            "resampling finished"
        );

        if let Some(path) = &self.settings.log_path {
            if let Err(err) = report.write_to(path) {
                warn!(path = %path.display(), error = %err, "could not write resampling report");
            }
        }
        Ok(ResampleOutcome {
            dataset: result,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMetric;
    use crate::testing::dummies::{MINORITY, blobs, mixed};

    #[test]
    fn euclidean_pool_is_normalized_and_hvdm_pool_is_raw() {
        let ds = blobs(4, 8, 2);
        let euclidean = ResamplerSettings::new().with_seed(1);
        let run = Run::start("test", &euclidean, &ds).unwrap();
        assert!(run.pool.iter().flatten().all(|v| (0.0..=1.0).contains(v)));

        let hvdm = ResamplerSettings::new()
            .with_seed(1)
            .with_metric(DistanceMetric::Hvdm);
        let run = Run::start("test", &hvdm, &ds).unwrap();
        assert_eq!(&run.pool, ds.features());
        assert_eq!(run.minority(), MINORITY);
    }

    #[test]
    fn finish_without_marks_returns_the_input() {
        let ds = mixed();
        let settings = ResamplerSettings::new().with_seed(1);
        let run = Run::start("test", &settings, &ds).unwrap();
        let out = run.finish(None).unwrap();
        assert_eq!(out.dataset.features(), ds.features());
        assert_eq!(out.dataset.labels(), ds.labels());
        assert!(out.report.created.is_empty());
        assert!(out.report.removed.is_empty());
    }

    #[test]
    fn finish_rejects_marks_of_wrong_length() {
        let ds = mixed();
        let settings = ResamplerSettings::new().with_seed(1);
        let run = Run::start("test", &settings, &ds).unwrap();
        assert!(run.finish(Some(vec![false; 3])).is_err());
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let ds = Dataset::new(crate::testing::dummies::header_numeric(2), vec![], vec![]).unwrap();
        let settings = ResamplerSettings::new();
        assert!(matches!(
            Run::start("test", &settings, &ds).err().unwrap(),
            ResampleError::Config(_)
        ));
    }
}

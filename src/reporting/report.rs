use crate::core::{ClassCounts, Dataset};
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Observational summary of one resampling run.
#[derive(Debug, Clone, Serialize)]
pub struct ResamplingReport {
    pub algorithm: String,
    pub seed: u64,
    pub counts_before: BTreeMap<String, usize>,
    pub counts_after: BTreeMap<String, usize>,
    pub imbalance_before: f64,
    pub imbalance_after: f64,
    pub elapsed_seconds: f64,
    /// Positions of synthetic rows in the output dataset.
    pub created: Vec<usize>,
    /// Input row each synthetic row was seeded from, parallel to `created`.
    pub sources: Vec<usize>,
    /// Positions of dropped rows in the input dataset.
    pub removed: Vec<usize>,
}

fn named_counts(dataset: &Dataset, counts: &ClassCounts) -> BTreeMap<String, usize> {
    counts
        .iter()
        .map(|(label, count)| {
            let name = dataset
                .label_name(label)
                .map(str::to_string)
                .unwrap_or_else(|| label.to_string());
            (name, count)
        })
        .collect()
}

impl ResamplingReport {
    pub fn new(
        algorithm: &str,
        seed: u64,
        before: &Dataset,
        after: &Dataset,
        elapsed: Duration,
        created: Vec<usize>,
        removed: Vec<usize>,
    ) -> Self {
        let counts_before = before.class_counts();
        let counts_after = after.class_counts();
        Self {
            algorithm: algorithm.to_string(),
            seed,
            counts_before: named_counts(before, &counts_before),
            counts_after: named_counts(after, &counts_after),
            imbalance_before: counts_before.imbalance_ratio(),
            imbalance_after: counts_after.imbalance_ratio(),
            elapsed_seconds: elapsed.as_secs_f64(),
            created,
            sources: Vec::new(),
            removed,
        }
    }

    pub fn with_sources(mut self, sources: Vec<usize>) -> Self {
        self.sources = sources;
        self
    }

    /// Writes the report, preceded by a timestamp line, to `path`.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "# {}", Local::now().to_rfc3339())?;
        write!(out, "{self}")?;
        out.flush()
    }
}

fn write_counts(f: &mut Formatter<'_>, title: &str, counts: &BTreeMap<String, usize>) -> std::fmt::Result {
    write!(f, "{title}:")?;
    for (name, count) in counts {
        write!(f, " {name}={count}")?;
    }
    writeln!(f)
}

fn write_indices(f: &mut Formatter<'_>, title: &str, indices: &[usize]) -> std::fmt::Result {
    let joined: Vec<String> = indices.iter().map(usize::to_string).collect();
    writeln!(f, "{title} ({}): [{}]", indices.len(), joined.join(", "))
}

impl Display for ResamplingReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "algorithm: {}", self.algorithm)?;
        writeln!(f, "seed: {}", self.seed)?;
        write_counts(f, "classes before", &self.counts_before)?;
        write_counts(f, "classes after", &self.counts_after)?;
        writeln!(
            f,
            "imbalance ratio: {:.4} -> {:.4}",
            self.imbalance_before, self.imbalance_after
        )?;
        writeln!(f, "elapsed: {:.3}s", self.elapsed_seconds)?;
        write_indices(f, "created", &self.created)?;
        write_indices(f, "sources", &self.sources)?;
        write_indices(f, "removed", &self.removed)
    }
}

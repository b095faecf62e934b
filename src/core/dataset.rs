use crate::core::error::{ResampleError, Result};
use crate::core::instance_header::InstanceHeader;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub type Matrix = Vec<Vec<f64>>;

/// In-memory labeled table: one feature vector and one class label per row.
///
/// Labels are indices into the header's class attribute. Nominal features are
/// stored as codes into their attribute's value table.
#[derive(Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    features: Matrix,
    labels: Vec<usize>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>, features: Matrix, labels: Vec<usize>) -> Result<Self> {
        let n_classes = match header.class_attribute() {
            Some(class_attr) => class_attr.number_of_values(),
            None => {
                return Err(ResampleError::config(
                    "class attribute must exist and be nominal",
                ));
            }
        };
        if features.len() != labels.len() {
            return Err(ResampleError::DimensionMismatch {
                expected: features.len(),
                found: labels.len(),
            });
        }

        let width = header.number_of_features();
        for row in &features {
            if row.len() != width {
                return Err(ResampleError::DimensionMismatch {
                    expected: width,
                    found: row.len(),
                });
            }
        }
        if let Some(bad) = labels.iter().find(|&&l| l >= n_classes) {
            return Err(ResampleError::config(format!(
                "label {bad} outside class table of {n_classes} values"
            )));
        }

        for feature in 0..width {
            let Some(nominal) = header.nominal_feature(feature) else {
                continue;
            };
            let n_values = nominal.number_of_values() as f64;
            for row in &features {
                let code = row[feature];
                if code.fract() != 0.0 || code < 0.0 || code >= n_values {
                    return Err(ResampleError::config(format!(
                        "invalid code {code} for nominal attribute '{}'",
                        nominal.name
                    )));
                }
            }
        }

        Ok(Self {
            header,
            features,
            labels,
        })
    }

    /// Rebuilds a dataset over the same header without re-validating rows.
    pub(crate) fn from_parts(header: Arc<InstanceHeader>, features: Matrix, labels: Vec<usize>) -> Self {
        Self {
            header,
            features,
            labels,
        }
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn shared_header(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn number_of_features(&self) -> usize {
        self.header.number_of_features()
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.features.get(index).map(Vec::as_slice)
    }

    pub fn label(&self, index: usize) -> Option<usize> {
        self.labels.get(index).copied()
    }

    pub fn label_name(&self, label: usize) -> Option<&str> {
        self.header.class_attribute()?.value(label)
    }

    /// Decoded string value of a nominal cell, `None` for numeric features.
    pub fn nominal_value(&self, row: usize, feature: usize) -> Option<&str> {
        let code = *self.features.get(row)?.get(feature)?;
        self.header.nominal_feature(feature)?.value(code as usize)
    }

    pub fn class_counts(&self) -> ClassCounts {
        ClassCounts::from_labels(&self.labels)
    }

    pub fn indices_of_label(&self, label: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn into_parts(self) -> (Arc<InstanceHeader>, Matrix, Vec<usize>) {
        (self.header, self.features, self.labels)
    }
}

/// Occurrence count per label, ordered by label index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts(BTreeMap<usize, usize>);

impl ClassCounts {
    pub fn from_labels(labels: &[usize]) -> Self {
        let mut counts = BTreeMap::new();
        for &label in labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        ClassCounts(counts)
    }

    pub fn get(&self, label: usize) -> usize {
        self.0.get(&label).copied().unwrap_or(0)
    }

    pub fn number_of_classes(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&l, &c)| (l, c))
    }

    /// Label with the fewest occurrences; ties go to the lowest label index.
    pub fn minority_label(&self) -> Option<usize> {
        self.0
            .iter()
            .min_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(b.0)))
            .map(|(&l, _)| l)
    }

    /// Largest count among the labels other than `excluded`.
    pub fn largest_count_excluding(&self, excluded: usize) -> usize {
        self.0
            .iter()
            .filter(|&(&l, _)| l != excluded)
            .map(|(_, &c)| c)
            .max()
            .unwrap_or(0)
    }

    /// Majority count over minority count. 1.0 for fewer than two classes.
    pub fn imbalance_ratio(&self) -> f64 {
        let max = self.0.values().copied().max().unwrap_or(0);
        let min = self.0.values().copied().min().unwrap_or(0);
        if self.0.len() < 2 || min == 0 {
            1.0
        } else {
            max as f64 / min as f64
        }
    }
}

/// How the untouchable (minority) label is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinorityPolicy {
    /// Label with the globally minimum count.
    #[default]
    Auto,
    /// An explicitly chosen label index.
    Pinned(usize),
    /// An explicitly chosen label, by its name in the class attribute.
    Named(String),
}

impl MinorityPolicy {
    pub fn resolve(&self, counts: &ClassCounts, header: &InstanceHeader) -> Result<usize> {
        let label = match self {
            MinorityPolicy::Auto => {
                return counts
                    .minority_label()
                    .ok_or_else(|| ResampleError::config("dataset has no labeled rows"));
            }
            MinorityPolicy::Pinned(label) => *label,
            MinorityPolicy::Named(name) => header
                .class_attribute()
                .and_then(|c| c.index_of_value(name))
                .ok_or_else(|| ResampleError::config(format!("unknown class label '{name}'")))?,
        };
        if counts.get(label) == 0 {
            return Err(ResampleError::config(format!(
                "pinned minority label {label} does not occur in the dataset"
            )));
        }
        Ok(label)
    }
}

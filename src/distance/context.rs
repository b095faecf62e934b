use crate::core::{InstanceHeader, Matrix, ResampleError, Result};

/// Statistics of a reference pool needed by the heterogeneous metric.
///
/// Numeric features keep their population standard deviation. Nominal
/// features keep `P(class | value)` for every value of the attribute.
#[derive(Debug, Clone)]
pub struct DistanceContext {
    nominal: Vec<bool>,
    std_devs: Vec<f64>,
    conditionals: Vec<Vec<Vec<f64>>>,
}

impl DistanceContext {
    pub fn build(header: &InstanceHeader, features: &Matrix, labels: &[usize]) -> Result<Self> {
        let width = header.number_of_features();
        if features.len() != labels.len() {
            return Err(ResampleError::DimensionMismatch {
                expected: features.len(),
                found: labels.len(),
            });
        }
        if let Some(row) = features.iter().find(|r| r.len() != width) {
            return Err(ResampleError::DimensionMismatch {
                expected: width,
                found: row.len(),
            });
        }

        let n_classes = header.number_of_classes();
        let nominal = header.nominal_mask();
        let mut std_devs = vec![0.0; width];
        let mut conditionals = vec![Vec::new(); width];

        for feature in 0..width {
            match header.nominal_feature(feature) {
                Some(attr) => {
                    conditionals[feature] = class_conditionals(
                        features,
                        labels,
                        feature,
                        attr.number_of_values(),
                        n_classes,
                    );
                }
                None => std_devs[feature] = population_std(features, feature),
            }
        }

        Ok(Self {
            nominal,
            std_devs,
            conditionals,
        })
    }

    pub fn width(&self) -> usize {
        self.nominal.len()
    }

    pub fn is_purely_numeric(&self) -> bool {
        self.nominal.iter().all(|&n| !n)
    }

    pub fn is_nominal(&self, feature: usize) -> bool {
        self.nominal.get(feature).copied().unwrap_or(false)
    }

    pub fn std_dev(&self, feature: usize) -> f64 {
        self.std_devs.get(feature).copied().unwrap_or(0.0)
    }

    /// Squared contribution of a numeric feature: `(|a - b| / 4σ)²`.
    pub(crate) fn numeric_term(&self, feature: usize, a: f64, b: f64) -> f64 {
        let sigma = self.std_dev(feature);
        if sigma <= 0.0 {
            return 0.0;
        }
        let scaled = (a - b).abs() / (4.0 * sigma);
        scaled * scaled
    }

    /// Total-variation distance between the class distributions of two
    /// nominal values: 0 for equal values, never above 1.
    pub(crate) fn nominal_term(&self, feature: usize, a: f64, b: f64) -> f64 {
        if a == b {
            return 0.0;
        }
        let table = &self.conditionals[feature];
        let empty = Vec::new();
        let pa = table.get(a as usize).unwrap_or(&empty);
        let pb = table.get(b as usize).unwrap_or(&empty);
        let n = pa.len().max(pb.len());
        let sum: f64 = (0..n)
            .map(|c| {
                let x = pa.get(c).copied().unwrap_or(0.0);
                let y = pb.get(c).copied().unwrap_or(0.0);
                (x - y).abs()
            })
            .sum();
        (0.5 * sum).min(1.0)
    }
}

fn population_std(features: &Matrix, feature: usize) -> f64 {
    let n = features.len();
    if n == 0 {
        return 0.0;
    }
    let mean = features.iter().map(|r| r[feature]).sum::<f64>() / n as f64;
    let var = features
        .iter()
        .map(|r| {
            let d = r[feature] - mean;
            d * d
        })
        .sum::<f64>()
        / n as f64;
    var.sqrt()
}

fn class_conditionals(
    features: &Matrix,
    labels: &[usize],
    feature: usize,
    n_values: usize,
    n_classes: usize,
) -> Vec<Vec<f64>> {
    let mut counts = vec![vec![0usize; n_classes]; n_values];
    for (row, &label) in features.iter().zip(labels) {
        let code = row[feature];
        if code < 0.0 || label >= n_classes {
            continue;
        }
        if let Some(per_class) = counts.get_mut(code as usize) {
            per_class[label] += 1;
        }
    }
    counts
        .into_iter()
        .map(|per_class| {
            let total: usize = per_class.iter().sum();
            if total == 0 {
                vec![0.0; n_classes]
            } else {
                per_class
                    .into_iter()
                    .map(|c| c as f64 / total as f64)
                    .collect()
            }
        })
        .collect()
}

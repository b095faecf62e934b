use crate::core::{Dataset, InstanceHeader, Matrix};

/// Per-feature min and max of a dataset.
///
/// Nominal features carry the identity span `[0, 1]` so their codes pass
/// through both directions unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRanges {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl AttributeRanges {
    pub fn compute(header: &InstanceHeader, features: &Matrix) -> Self {
        let width = header.number_of_features();
        let mut min = vec![f64::INFINITY; width];
        let mut max = vec![f64::NEG_INFINITY; width];
        for row in features {
            for (j, &v) in row.iter().enumerate().take(width) {
                if v < min[j] {
                    min[j] = v;
                }
                if v > max[j] {
                    max[j] = v;
                }
            }
        }
        for (j, nominal) in header.nominal_mask().into_iter().enumerate() {
            if nominal || features.is_empty() {
                min[j] = 0.0;
                max[j] = 1.0;
            }
        }
        Self { min, max }
    }

    pub fn width(&self) -> usize {
        self.min.len()
    }

    pub fn normalize_value(&self, feature: usize, v: f64) -> f64 {
        let span = self.max[feature] - self.min[feature];
        if span == 0.0 {
            0.0
        } else {
            (v - self.min[feature]) / span
        }
    }

    pub fn denormalize_value(&self, feature: usize, v: f64) -> f64 {
        self.min[feature] + v * (self.max[feature] - self.min[feature])
    }

    pub fn normalize_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(j, &v)| self.normalize_value(j, v))
            .collect()
    }

    pub fn denormalize_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(j, &v)| self.denormalize_value(j, v))
            .collect()
    }
}

pub fn attribute_ranges(dataset: &Dataset) -> AttributeRanges {
    AttributeRanges::compute(dataset.header(), dataset.features())
}

/// Maps every numeric feature linearly into [0, 1].
pub fn normalize(dataset: &Dataset) -> Matrix {
    let ranges = attribute_ranges(dataset);
    dataset
        .features()
        .iter()
        .map(|row| ranges.normalize_row(row))
        .collect()
}

/// Inverse of [`normalize`] given the ranges it was computed with.
pub fn denormalize(matrix: &Matrix, max: &[f64], min: &[f64]) -> Matrix {
    let ranges = AttributeRanges {
        min: min.to_vec(),
        max: max.to_vec(),
    };
    matrix.iter().map(|row| ranges.denormalize_row(row)).collect()
}

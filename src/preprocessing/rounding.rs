use crate::core::Dataset;

/// Upper bound on decimal places, fixed or inferred.
pub const MAX_DECIMALS: u32 = 10;

/// Decimal places kept for synthetic numeric values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precision {
    Fixed(u32),
    /// One entry per feature, usually from [`infer_precision`].
    PerFeature(Vec<u32>),
}

impl Precision {
    pub fn for_dataset(fixed: Option<u32>, dataset: &Dataset) -> Self {
        match fixed {
            Some(p) => Precision::Fixed(p),
            None => Precision::PerFeature(infer_precision(dataset)),
        }
    }

    pub fn decimals(&self, feature: usize) -> u32 {
        match self {
            Precision::Fixed(p) => *p,
            Precision::PerFeature(v) => v.get(feature).copied().unwrap_or(MAX_DECIMALS),
        }
    }
}

#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn decimal_places(value: f64) -> u32 {
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, frac)) => (frac.len() as u32).min(MAX_DECIMALS),
        None => 0,
    }
}

/// Largest number of decimal places written in each feature column.
pub fn infer_precision(dataset: &Dataset) -> Vec<u32> {
    let mut out = vec![0; dataset.number_of_features()];
    for row in dataset.features() {
        for (j, &v) in row.iter().enumerate() {
            out[j] = out[j].max(decimal_places(v));
        }
    }
    out
}

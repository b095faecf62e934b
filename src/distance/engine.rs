use crate::core::{ResampleError, Result};
use crate::distance::{DistanceContext, DistanceMetric};

pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(ai, bi)| (ai - bi).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Distance between two feature vectors under `metric`.
///
/// Euclidean expects both vectors already normalized to [0, 1]. HVDM reads
/// per-feature statistics from `context`, which must describe the pool the
/// vectors were drawn from.
pub fn distance(
    a: &[f64],
    b: &[f64],
    metric: DistanceMetric,
    context: &DistanceContext,
) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ResampleError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    match metric {
        DistanceMetric::Euclidean => Ok(euclidean(a, b)),
        DistanceMetric::Hvdm => hvdm(a, b, context),
    }
}

fn hvdm(a: &[f64], b: &[f64], context: &DistanceContext) -> Result<f64> {
    if a.len() != context.width() {
        return Err(ResampleError::DimensionMismatch {
            expected: context.width(),
            found: a.len(),
        });
    }
    let purely_numeric = context.is_purely_numeric();
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .enumerate()
        .map(|(i, (&x, &y))| {
            if !purely_numeric && context.is_nominal(i) {
                context.nominal_term(i, x, y)
            } else {
                context.numeric_term(i, x, y)
            }
        })
        .sum();
    Ok(sum.sqrt())
}

use crate::core::{ResampleError, Result};

/// Parameters of density-weighted synthesis.
///
/// `balance_level` is the fraction of the class gap to close, in [0, 1].
/// Synthesis only happens while `minority / majority` stays below
/// `imbalance_threshold`, in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityWeighting {
    balance_level: f64,
    imbalance_threshold: f64,
}

impl DensityWeighting {
    pub fn new(balance_level: f64, imbalance_threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&balance_level) {
            return Err(ResampleError::config(format!(
                "balance level must be in [0, 1], got {balance_level}"
            )));
        }
        if !(imbalance_threshold > 0.0 && imbalance_threshold <= 1.0) {
            return Err(ResampleError::config(format!(
                "imbalance threshold must be in (0, 1], got {imbalance_threshold}"
            )));
        }
        Ok(Self {
            balance_level,
            imbalance_threshold,
        })
    }

    pub fn balance_level(&self) -> f64 {
        self.balance_level
    }

    pub fn imbalance_threshold(&self) -> f64 {
        self.imbalance_threshold
    }

    pub fn is_imbalanced(&self, minority: usize, majority: usize) -> bool {
        if majority == 0 {
            return false;
        }
        (minority as f64 / majority as f64) < self.imbalance_threshold
    }

    /// `G = round((majority - minority) * balance_level)`.
    pub fn budget(&self, majority: usize, minority: usize) -> usize {
        (majority.saturating_sub(minority) as f64 * self.balance_level).round() as usize
    }

    /// Fraction of `neighbor_labels` that differ from `own_label`.
    pub fn difficulty<I>(neighbor_labels: I, own_label: usize) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        let (mut total, mut foreign) = (0usize, 0usize);
        for label in neighbor_labels {
            total += 1;
            if label != own_label {
                foreign += 1;
            }
        }
        if total == 0 {
            0.0
        } else {
            foreign as f64 / total as f64
        }
    }

    /// Splits `budget` across seeds in proportion to their difficulty,
    /// flooring each share. All-zero difficulties share the budget evenly.
    pub fn allocate(ratios: &[f64], budget: usize) -> Vec<usize> {
        if ratios.is_empty() {
            return Vec::new();
        }
        let sum: f64 = ratios.iter().sum();
        let even = 1.0 / ratios.len() as f64;
        ratios
            .iter()
            .map(|&r| {
                let share = if sum > 0.0 { r / sum } else { even };
                (share * budget as f64).floor() as usize
            })
            .collect()
    }
}

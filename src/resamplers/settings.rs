use crate::core::{MinorityPolicy, ResampleError, Result};
use crate::distance::DistanceMetric;
use crate::preprocessing::MAX_DECIMALS;
use chrono::Utc;
use std::path::PathBuf;

pub const DEFAULT_K: usize = 5;

/// Parameters shared by every algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct ResamplerSettings {
    pub metric: DistanceMetric,
    pub k: usize,
    /// PRNG seed. Unset means the wall clock at the start of each run.
    pub seed: Option<u64>,
    /// Decimal places of synthetic numeric values. Unset means the largest
    /// number of places written in each input column.
    pub precision: Option<u32>,
    pub minority: MinorityPolicy,
    /// When set, the run report is written to this file.
    pub log_path: Option<PathBuf>,
}

impl Default for ResamplerSettings {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::default(),
            k: DEFAULT_K,
            seed: None,
            precision: None,
            minority: MinorityPolicy::Auto,
            log_path: None,
        }
    }
}

impl ResamplerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_precision(mut self, decimals: u32) -> Self {
        self.precision = Some(decimals);
        self
    }

    pub fn with_minority(mut self, policy: MinorityPolicy) -> Self {
        self.minority = policy;
        self
    }

    pub fn with_log_path(mut self, path: PathBuf) -> Self {
        self.log_path = Some(path);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(ResampleError::config("k must be a positive integer"));
        }
        if let Some(decimals) = self.precision.filter(|&d| d > MAX_DECIMALS) {
            return Err(ResampleError::config(format!(
                "precision must be at most {MAX_DECIMALS} decimal places, got {decimals}"
            )));
        }
        Ok(())
    }

    pub fn resolved_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| Utc::now().timestamp_millis().unsigned_abs())
    }
}

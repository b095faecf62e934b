use crate::core::{ResampleError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DistanceMetric {
    /// L2 norm over features normalized to [0, 1].
    #[default]
    Euclidean,
    /// Heterogeneous Value Difference Metric over raw features.
    Hvdm,
}

impl DistanceMetric {
    pub fn parse(id: &str) -> Result<Self> {
        id.trim()
            .parse()
            .map_err(|_| ResampleError::InvalidMetric(id.to_string()))
    }

    /// Whether rows must be mapped into [0, 1] before measuring.
    pub fn needs_normalization(&self) -> bool {
        matches!(self, DistanceMetric::Euclidean)
    }
}

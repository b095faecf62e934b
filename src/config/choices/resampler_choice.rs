use crate::config::choices::Choice;
use crate::resamplers::{
    DEFAULT_BALANCE_LEVEL, DEFAULT_ENN_K, DEFAULT_IMBALANCE_THRESHOLD, DEFAULT_K, DEFAULT_PERCENT,
};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_metric() -> String {
    "EUCLIDEAN".to_string()
}

fn default_k() -> usize {
    DEFAULT_K
}

fn default_percent() -> u32 {
    DEFAULT_PERCENT
}

fn default_enn_k() -> usize {
    DEFAULT_ENN_K
}

fn default_balance_level() -> f64 {
    DEFAULT_BALANCE_LEVEL
}

fn default_imbalance_threshold() -> f64 {
    DEFAULT_IMBALANCE_THRESHOLD
}

/// Parameters every algorithm accepts. Flattened into each `params` object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CommonParameters {
    #[serde(default = "default_metric")]
    #[schemars(
        title = "Metric",
        description = "Distance metric: EUCLIDEAN or HVDM (case-insensitive)",
        default = "default_metric"
    )]
    pub metric: String,

    #[serde(default = "default_k")]
    #[schemars(
        title = "Neighbors",
        description = "Number of nearest neighbors considered per row",
        range(min = 1),
        default = "default_k"
    )]
    pub k: usize,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "PRNG seed; the current time in milliseconds when omitted"
    )]
    pub seed: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Precision",
        description = "Decimal places of synthetic numeric values; inferred per column when omitted",
        range(max = 10)
    )]
    pub precision: Option<u32>,

    #[serde(default)]
    #[schemars(
        title = "Minority label",
        description = "Class value treated as the minority; the least frequent class when omitted"
    )]
    pub minority_label: Option<String>,

    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        title = "Report path",
        description = "File the run report is written to",
        extend("format" = "path")
    )]
    pub log_path: Option<PathBuf>,
}

impl Default for CommonParameters {
    fn default() -> Self {
        Self {
            metric: default_metric(),
            k: default_k(),
            seed: None,
            precision: None,
            minority_label: None,
            log_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SmoteParameters {
    #[serde(flatten)]
    pub common: CommonParameters,

    #[serde(default = "default_percent")]
    #[schemars(
        title = "Percentage",
        description = "Amount of oversampling; a positive multiple of 100",
        range(min = 100),
        default = "default_percent"
    )]
    pub percent: u32,
}

impl Default for SmoteParameters {
    fn default() -> Self {
        Self {
            common: CommonParameters::default(),
            percent: default_percent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SmoteEnnParameters {
    #[serde(flatten)]
    pub common: CommonParameters,

    #[serde(default = "default_percent")]
    #[schemars(
        title = "Percentage",
        description = "Amount of oversampling; a positive multiple of 100",
        range(min = 100),
        default = "default_percent"
    )]
    pub percent: u32,

    #[serde(default = "default_enn_k")]
    #[schemars(
        title = "Cleaning neighbors",
        description = "Neighbors voting on each row during the cleaning pass",
        range(min = 1),
        default = "default_enn_k"
    )]
    pub enn_k: usize,
}

impl Default for SmoteEnnParameters {
    fn default() -> Self {
        Self {
            common: CommonParameters::default(),
            percent: default_percent(),
            enn_k: default_enn_k(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AdasynParameters {
    #[serde(flatten)]
    pub common: CommonParameters,

    #[serde(default = "default_balance_level")]
    #[schemars(
        title = "Balance level",
        description = "Fraction of the class gap to fill (0.0–1.0)",
        range(min = 0.0, max = 1.0),
        default = "default_balance_level"
    )]
    pub balance_level: f64,

    #[serde(default = "default_imbalance_threshold")]
    #[schemars(
        title = "Imbalance threshold",
        description = "Minority/majority ratio at or above which no rows are generated",
        range(min = 0.0, max = 1.0),
        default = "default_imbalance_threshold"
    )]
    pub imbalance_threshold: f64,
}

impl Default for AdasynParameters {
    fn default() -> Self {
        Self {
            common: CommonParameters::default(),
            balance_level: default_balance_level(),
            imbalance_threshold: default_imbalance_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AdomsParameters {
    #[serde(flatten)]
    pub common: CommonParameters,

    #[serde(default = "default_percent")]
    #[schemars(
        title = "Percentage",
        description = "Amount of oversampling; a positive multiple of 100",
        range(min = 100),
        default = "default_percent"
    )]
    pub percent: u32,
}

impl Default for AdomsParameters {
    fn default() -> Self {
        Self {
            common: CommonParameters::default(),
            percent: default_percent(),
        }
    }
}

/// Parameters of the pure cleaning algorithms.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct CleaningParameters {
    #[serde(flatten)]
    pub common: CommonParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ResamplerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ResamplerChoice {
    #[strum_discriminants(strum(
        message = "SMOTE",
        detailed_message = "Synthetic minority rows interpolated uniformly toward minority neighbors."
    ))]
    Smote(SmoteParameters),

    #[strum_discriminants(strum(
        message = "SMOTE + ENN",
        detailed_message = "SMOTE followed by edited-nearest-neighbor cleaning of the combined set."
    ))]
    SmoteEnn(SmoteEnnParameters),

    #[strum_discriminants(strum(
        message = "ADASYN",
        detailed_message = "Adaptive synthesis: more rows for minority rows surrounded by other classes."
    ))]
    Adasyn(AdasynParameters),

    #[strum_discriminants(strum(
        message = "ADOMS",
        detailed_message = "Synthetic rows placed along the first principal axis of each neighborhood."
    ))]
    Adoms(AdomsParameters),

    #[strum_discriminants(strum(
        message = "Edited Nearest Neighbors",
        detailed_message = "Removes rows whose neighbors vote for another class. Minority rows are kept."
    ))]
    EditedNearestNeighbors(CleaningParameters),

    #[strum_discriminants(strum(
        message = "Tomek Links",
        detailed_message = "Removes both rows of every cross-class mutual nearest-neighbor pair."
    ))]
    TomekLinks(CleaningParameters),
}

impl ResamplerChoice {
    pub fn common(&self) -> &CommonParameters {
        match self {
            ResamplerChoice::Smote(p) => &p.common,
            ResamplerChoice::SmoteEnn(p) => &p.common,
            ResamplerChoice::Adasyn(p) => &p.common,
            ResamplerChoice::Adoms(p) => &p.common,
            ResamplerChoice::EditedNearestNeighbors(p) | ResamplerChoice::TomekLinks(p) => {
                &p.common
            }
        }
    }
}

impl Choice for ResamplerChoice {
    type Kind = ResamplerKind;

    fn schema() -> Schema {
        schema_for!(ResamplerChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        let params = match kind {
            ResamplerKind::Smote => serde_json::to_value(SmoteParameters::default()),
            ResamplerKind::SmoteEnn => serde_json::to_value(SmoteEnnParameters::default()),
            ResamplerKind::Adasyn => serde_json::to_value(AdasynParameters::default()),
            ResamplerKind::Adoms => serde_json::to_value(AdomsParameters::default()),
            ResamplerKind::EditedNearestNeighbors | ResamplerKind::TomekLinks => {
                serde_json::to_value(CleaningParameters::default())
            }
        };
        params.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use strum::{EnumMessage, IntoEnumIterator};

    fn root_props_of<T: JsonSchema>() -> Value {
        let root = schema_for!(T);
        let v = serde_json::to_value(root).expect("schema to JSON");
        v.get("schema")
            .cloned()
            .unwrap_or(v)
            .get("properties")
            .cloned()
            .unwrap_or_else(|| json!({}))
    }

    #[test]
    fn missing_fields_apply_defaults() {
        let p: SmoteParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, SmoteParameters::default());
        assert_eq!(p.common.metric, "EUCLIDEAN");
        assert_eq!(p.common.k, 5);
        assert_eq!(p.percent, 100);

        let p: SmoteEnnParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.enn_k, 3);

        let p: AdasynParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.balance_level, 1.0);
        assert_eq!(p.imbalance_threshold, 0.75);
    }

    #[test]
    fn common_parameters_are_flattened() {
        let v = serde_json::to_value(SmoteParameters::default()).unwrap();
        let obj = v.as_object().unwrap();
        for k in ["metric", "k", "seed", "precision", "minority_label", "log_path", "percent"] {
            assert!(obj.contains_key(k), "missing key in params: {k}");
        }
        assert!(!obj.contains_key("common"));
    }

    #[test]
    fn tagged_enum_uses_kebab_case_type() {
        let choice = ResamplerChoice::SmoteEnn(SmoteEnnParameters::default());
        let v = serde_json::to_value(choice).unwrap();
        assert_eq!(v.get("type").and_then(Value::as_str), Some("smote-enn"));
        assert_eq!(v["params"]["enn_k"].as_u64(), Some(3));

        let choice: ResamplerChoice = serde_json::from_value(json!({
            "type": "tomek-links",
            "params": { "metric": "hvdm", "seed": 7 }
        }))
        .unwrap();
        let ResamplerChoice::TomekLinks(p) = &choice else {
            panic!("expected tomek-links, got {choice:?}");
        };
        assert_eq!(p.common.metric, "hvdm");
        assert_eq!(p.common.seed, Some(7));
        assert_eq!(choice.common().k, 5);
    }

    #[test]
    fn default_params_rebuild_every_kind() {
        for kind in ResamplerKind::iter() {
            let params = <ResamplerChoice as Choice>::default_params(kind);
            assert!(params.is_object(), "{kind}: {params}");
            let rebuilt = <ResamplerChoice as Choice>::from_parts(kind, params).unwrap();
            assert_eq!(ResamplerKind::from(&rebuilt), kind);
            assert_eq!(rebuilt.common(), &CommonParameters::default());
        }
    }

    #[test]
    fn schema_has_titles() {
        let props = root_props_of::<AdasynParameters>();
        let obj = props.as_object().unwrap();
        for (k, title) in [
            ("balance_level", "Balance level"),
            ("imbalance_threshold", "Imbalance threshold"),
        ] {
            let field = obj.get(k).unwrap().as_object().unwrap();
            assert_eq!(field.get("title").and_then(Value::as_str), Some(title));
        }

        let props = root_props_of::<CommonParameters>();
        let k = props.get("k").unwrap();
        assert_eq!(k.get("title").and_then(Value::as_str), Some("Neighbors"));
        assert_eq!(k.get("default").and_then(Value::as_u64), Some(5));
        let metric = props.get("metric").unwrap();
        assert_eq!(metric.get("default").and_then(Value::as_str), Some("EUCLIDEAN"));
    }

    #[test]
    fn discriminant_messages_available() {
        assert_eq!(ResamplerKind::Smote.get_message(), Some("SMOTE"));
        assert_eq!(ResamplerKind::SmoteEnn.to_string(), "smote-enn");
        for kind in ResamplerKind::iter() {
            assert!(kind.get_detailed_message().is_some());
        }
    }
}

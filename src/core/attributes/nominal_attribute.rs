use crate::core::attributes::Attribute;
use std::any::Any;
use std::collections::HashMap;

/// Categorical attribute. Values are stored in rows as their index in
/// `values`, and mapped back through the same table on output.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(
        name: String,
        values: Vec<String>,
        label_to_index: HashMap<String, usize>,
    ) -> NominalAttribute {
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    /// Builds the value table and its inverse map from an ordered list of labels.
    pub fn from_labels<I, S>(name: String, labels: I) -> NominalAttribute
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = labels.into_iter().map(Into::into).collect();
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, v: &str) -> Option<usize> {
        self.label_to_index.get(v).copied()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Maps an interpolated code onto the nearest valid one.
    pub fn snap_code(&self, code: f64) -> f64 {
        let last = self.values.len().saturating_sub(1) as f64;
        if code.is_nan() {
            return 0.0;
        }
        code.round().clamp(0.0, last)
    }
}

impl Attribute for NominalAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_nominal(&self) -> bool {
        true
    }
}

use crate::core::attributes::{Attribute, AttributeRef, NominalAttribute};

/// Schema shared by every row of a [`Dataset`](crate::core::Dataset).
///
/// `attributes` lists every column, the class included. All columns other
/// than `class_index` are features, kept in their original order.
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<AttributeRef>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn number_of_features(&self) -> usize {
        self.attributes.len().saturating_sub(1)
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        self.attributes.get(index).map(|a| a.as_ref() as &dyn Attribute)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> Option<&NominalAttribute> {
        self.attribute_at_index(self.class_index)?
            .as_any()
            .downcast_ref::<NominalAttribute>()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute()
            .map(NominalAttribute::number_of_values)
            .unwrap_or(0)
    }

    /// Attribute describing feature column `feature`, skipping the class column.
    pub fn feature_attribute(&self, feature: usize) -> Option<&dyn Attribute> {
        let index = if feature < self.class_index {
            feature
        } else {
            feature + 1
        };
        self.attribute_at_index(index)
    }

    pub fn feature_attributes(&self) -> impl Iterator<Item = &dyn Attribute> {
        self.attributes
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.class_index)
            .map(|(_, a)| a.as_ref() as &dyn Attribute)
    }

    /// Value table of a nominal feature, `None` for numeric ones.
    pub fn nominal_feature(&self, feature: usize) -> Option<&NominalAttribute> {
        self.feature_attribute(feature)?
            .as_any()
            .downcast_ref::<NominalAttribute>()
    }

    pub fn nominal_mask(&self) -> Vec<bool> {
        self.feature_attributes().map(|a| a.is_nominal()).collect()
    }

    pub fn is_purely_numeric(&self) -> bool {
        self.feature_attributes().all(|a| !a.is_nominal())
    }
}

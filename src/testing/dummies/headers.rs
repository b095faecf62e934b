use crate::core::InstanceHeader;
use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use std::sync::Arc;

pub const MINORITY: usize = 0;
pub const MAJORITY: usize = 1;

fn binary_class() -> AttributeRef {
    Arc::new(NominalAttribute::from_labels("class".into(), ["positive", "negative"])) as AttributeRef
}

/// `n_features` numeric columns followed by a binary class column.
pub fn header_numeric(n_features: usize) -> Arc<InstanceHeader> {
    let mut attributes: Vec<AttributeRef> = (0..n_features)
        .map(|i| Arc::new(NumericAttribute::new(format!("attr{}", i + 1))) as AttributeRef)
        .collect();
    attributes.push(binary_class());
    Arc::new(InstanceHeader::new("numeric".into(), attributes, n_features))
}

/// One numeric column, one nominal `color` column and the class.
pub fn header_with_nominal() -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = vec![
        Arc::new(NumericAttribute::new("size".into())) as AttributeRef,
        Arc::new(NominalAttribute::from_labels(
            "color".into(),
            ["red", "green", "blue"],
        )) as AttributeRef,
        binary_class(),
    ];
    Arc::new(InstanceHeader::new("mixed".into(), attributes, 2))
}

use crate::core::attributes::AttributeValue;
use serde::{Deserialize, Serialize};

/// An ordered sequence of attribute values.
///
/// Training vectors all share the same length and carry the class
/// attribute at a designated index. A query vector either carries the
/// class slot too (present but unused) or omits it, making it exactly
/// one value shorter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<AttributeValue>,
}

impl FeatureVector {
    pub fn new(values: Vec<AttributeValue>) -> FeatureVector {
        FeatureVector { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_at_index(&self, index: usize) -> Option<&AttributeValue> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }

    /// The class-attribute value, when the vector is long enough to
    /// carry the class slot.
    pub fn class_value(&self, class_index: usize) -> Option<&AttributeValue> {
        self.values.get(class_index)
    }
}

impl From<Vec<AttributeValue>> for FeatureVector {
    fn from(values: Vec<AttributeValue>) -> Self {
        FeatureVector::new(values)
    }
}

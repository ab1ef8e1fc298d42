use serde::{Deserialize, Serialize};

/// A single attribute value, typed once at ingestion.
///
/// Distance computation dispatches on the variant instead of inspecting
/// runtime types: numeric pairs difference, categorical pairs compare
/// for equality, a mixed pair counts as a categorical mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Numeric(f64),
    Categorical(String),
}

impl AttributeValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, AttributeValue::Numeric(_))
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, AttributeValue::Categorical(_))
    }

    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            AttributeValue::Numeric(v) => Some(*v),
            AttributeValue::Categorical(_) => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Numeric(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Categorical(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Categorical(value)
    }
}

mod attribute_value;

pub use attribute_value::AttributeValue;

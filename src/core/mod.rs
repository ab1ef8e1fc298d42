pub mod attributes;
pub mod instances;

use crate::core::attributes::AttributeValue;
use crate::core::instances::FeatureVector;
use crate::error::ClassifierError;

pub trait Classifier {
    fn train(&mut self, rows: Vec<FeatureVector>) -> Result<(), ClassifierError>;
    fn predict(&mut self, query: &FeatureVector) -> Result<AttributeValue, ClassifierError>;
}

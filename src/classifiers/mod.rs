pub mod classifier;
pub mod nearest_neighbor;

pub use classifier::Classifier;

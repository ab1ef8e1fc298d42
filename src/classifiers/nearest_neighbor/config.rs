use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Distance metric applied over the paired non-class attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Metric {
    Manhattan,
    Euclidean,
}

/// How a neighbor's vote is weighted during aggregation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum VoteWeighting {
    Uniform,
    InverseDistance,
}

/// Configuration value object read by the classifier.
///
/// Supplied once at construction; the classifier never parses
/// configuration syntax itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestNeighborConfig {
    /// Number of neighbors consulted per prediction, at least 1.
    pub k_nearest: usize,
    pub metric: Metric,
    /// Rescale numeric attributes by (value - min) / (max - min) before
    /// differencing.
    pub normalize: bool,
    pub weighting: VoteWeighting,
    /// Index of the class attribute within a training vector.
    pub class_index: usize,
}

impl NearestNeighborConfig {
    pub fn new(
        k_nearest: usize,
        metric: Metric,
        normalize: bool,
        weighting: VoteWeighting,
        class_index: usize,
    ) -> Result<NearestNeighborConfig, ClassifierError> {
        let config = NearestNeighborConfig {
            k_nearest,
            metric,
            normalize,
            weighting,
            class_index,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.k_nearest == 0 {
            return Err(ClassifierError::InvalidInput(
                "k must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

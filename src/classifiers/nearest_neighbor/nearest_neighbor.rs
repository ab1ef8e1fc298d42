use crate::classifiers::classifier::Classifier;
use crate::classifiers::nearest_neighbor::config::NearestNeighborConfig;
use crate::classifiers::nearest_neighbor::distance::DistanceEngine;
use crate::classifiers::nearest_neighbor::neighbors::select_nearest;
use crate::classifiers::nearest_neighbor::normalization::compute_params;
use crate::classifiers::nearest_neighbor::voting::vote;
use crate::core::attributes::AttributeValue;
use crate::core::instances::FeatureVector;
use crate::error::ClassifierError;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// k-nearest-neighbor classifier over mixed categorical/numeric
/// attribute vectors.
///
/// `train` stores the rows and nothing else; every `predict` derives
/// fresh normalization parameters, scans the whole training set for the
/// k nearest rows and aggregates their labels under the configured
/// voting scheme. Tie-breaking draws from the rng owned by the
/// classifier, so `with_seed` makes a prediction sequence reproducible.
pub struct NearestNeighbor {
    config: NearestNeighborConfig,
    training: Option<Vec<FeatureVector>>,
    rng: StdRng,
}

impl NearestNeighbor {
    pub fn new(config: NearestNeighborConfig) -> Result<NearestNeighbor, ClassifierError> {
        Self::build(config, StdRng::from_os_rng())
    }

    pub fn with_seed(
        config: NearestNeighborConfig,
        seed: u64,
    ) -> Result<NearestNeighbor, ClassifierError> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(
        config: NearestNeighborConfig,
        rng: StdRng,
    ) -> Result<NearestNeighbor, ClassifierError> {
        config.validate()?;
        Ok(NearestNeighbor {
            config,
            training: None,
            rng,
        })
    }

    pub fn config(&self) -> &NearestNeighborConfig {
        &self.config
    }

    pub fn training_size(&self) -> usize {
        self.training.as_ref().map_or(0, Vec::len)
    }

    fn validate_rows(&self, rows: &[FeatureVector]) -> Result<(), ClassifierError> {
        let first = rows.first().ok_or_else(|| {
            ClassifierError::InvalidInput("training set must not be empty".into())
        })?;
        if self.config.class_index >= first.len() {
            return Err(ClassifierError::InvalidInput(format!(
                "class index {} outside training rows of length {}",
                self.config.class_index,
                first.len()
            )));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != first.len() {
                return Err(ClassifierError::InvalidInput(format!(
                    "training row {i} has {} attributes, expected {}",
                    row.len(),
                    first.len()
                )));
            }
        }
        Ok(())
    }
}

impl Classifier for NearestNeighbor {
    /// Stores the training set wholesale, replacing any previous one.
    /// Rows must be non-empty, uniform in length and long enough to
    /// carry the configured class slot.
    fn train(&mut self, rows: Vec<FeatureVector>) -> Result<(), ClassifierError> {
        self.validate_rows(&rows)?;
        self.training = Some(rows);
        Ok(())
    }

    /// Predicts a class label for `query`, which carries either all
    /// attributes or all but the class slot.
    fn predict(&mut self, query: &FeatureVector) -> Result<AttributeValue, ClassifierError> {
        let training = self.training.as_ref().ok_or_else(|| {
            ClassifierError::InvalidInput("predict called before train".into())
        })?;

        let params = compute_params(training, self.config.class_index, self.config.normalize)?;
        let engine = DistanceEngine::new(self.config.metric, self.config.class_index, &params);
        let neighbors = select_nearest(
            query,
            training,
            self.config.k_nearest,
            &engine,
            &mut self.rng,
        )?;
        vote(&neighbors, &self.config, &mut self.rng)
    }
}

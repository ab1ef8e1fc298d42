use crate::classifiers::nearest_neighbor::config::{NearestNeighborConfig, VoteWeighting};
use crate::classifiers::nearest_neighbor::neighbors::NeighborDistance;
use crate::core::attributes::AttributeValue;
use crate::error::ClassifierError;
use rand::Rng;

/// Distances below this are treated as zero when weighting votes.
pub const ZERO_DISTANCE_THRESHOLD: f64 = 1e-7;

/// Fixed weight granted to a neighbor at (effectively) zero distance,
/// large enough to outvote any plausible set of finite-distance
/// neighbors without producing an infinity.
pub const ZERO_DISTANCE_WEIGHT: f64 = 999.99;

/// Accumulated vote weight per class label.
///
/// A small association list rather than a map: `AttributeValue` holds an
/// `f64` and has no sound `Eq + Hash`, label sets are tiny, and linear
/// iteration keeps the order deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteTally {
    entries: Vec<(AttributeValue, f64)>,
}

impl VoteTally {
    pub fn new() -> VoteTally {
        VoteTally::default()
    }

    pub fn add(&mut self, label: AttributeValue, weight: f64) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, total)) => *total += weight,
            None => self.entries.push((label, weight)),
        }
    }

    pub fn weight_of(&self, label: &AttributeValue) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, w)| *w)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(AttributeValue, f64)> {
        self.entries.iter()
    }
}

fn label_of(
    neighbor: &NeighborDistance<'_>,
    class_index: usize,
) -> Result<AttributeValue, ClassifierError> {
    neighbor
        .instance
        .class_value(class_index)
        .cloned()
        .ok_or_else(|| {
            ClassifierError::InvariantViolation(format!(
                "selected neighbor has no class attribute at index {class_index}"
            ))
        })
}

/// Every neighbor contributes weight 1 to its label.
pub fn uniform_votes(
    neighbors: &[NeighborDistance<'_>],
    class_index: usize,
) -> Result<VoteTally, ClassifierError> {
    let mut tally = VoteTally::new();
    for neighbor in neighbors {
        tally.add(label_of(neighbor, class_index)?, 1.0);
    }
    Ok(tally)
}

/// Every neighbor contributes `1 / distance` to its label; neighbors
/// closer than [`ZERO_DISTANCE_THRESHOLD`] contribute
/// [`ZERO_DISTANCE_WEIGHT`] instead.
pub fn weighted_votes(
    neighbors: &[NeighborDistance<'_>],
    class_index: usize,
) -> Result<VoteTally, ClassifierError> {
    let mut tally = VoteTally::new();
    for neighbor in neighbors {
        let weight = if neighbor.distance < ZERO_DISTANCE_THRESHOLD {
            ZERO_DISTANCE_WEIGHT
        } else {
            1.0 / neighbor.distance
        };
        tally.add(label_of(neighbor, class_index)?, weight);
    }
    Ok(tally)
}

/// The label with the maximum accumulated weight. When several labels
/// tie at the exact maximum, one of them is drawn uniformly at random.
pub fn winner<R: Rng>(
    tally: &VoteTally,
    rng: &mut R,
) -> Result<AttributeValue, ClassifierError> {
    if tally.is_empty() {
        return Err(ClassifierError::InvalidInput(
            "cannot pick a winner from an empty vote tally".into(),
        ));
    }

    let maximum = tally
        .iter()
        .map(|(_, w)| *w)
        .fold(f64::NEG_INFINITY, f64::max);
    let leaders: Vec<&AttributeValue> = tally
        .iter()
        .filter(|(_, w)| *w == maximum)
        .map(|(label, _)| label)
        .collect();

    if leaders.len() == 1 {
        Ok(leaders[0].clone())
    } else {
        Ok(leaders[rng.random_range(0..leaders.len())].clone())
    }
}

/// Aggregates the neighbor set under the configured weighting scheme and
/// resolves the winning label.
pub fn vote<R: Rng>(
    neighbors: &[NeighborDistance<'_>],
    config: &NearestNeighborConfig,
    rng: &mut R,
) -> Result<AttributeValue, ClassifierError> {
    let tally = match config.weighting {
        VoteWeighting::Uniform => uniform_votes(neighbors, config.class_index)?,
        VoteWeighting::InverseDistance => weighted_votes(neighbors, config.class_index)?,
    };
    winner(&tally, rng)
}

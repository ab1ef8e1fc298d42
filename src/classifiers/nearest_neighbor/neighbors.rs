use crate::classifiers::nearest_neighbor::distance::DistanceEngine;
use crate::core::instances::FeatureVector;
use crate::error::ClassifierError;
use rand::Rng;

/// A training row paired with its distance to the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborDistance<'a> {
    pub instance: &'a FeatureVector,
    pub distance: f64,
}

/// Selects exactly `k` nearest training rows.
///
/// Candidates are consumed in waves of equal minimum distance (exact
/// equality; identical rows and coarse categorical axes make such ties
/// routine). A whole tied wave is taken when it fits the remaining
/// budget; once it would overflow, members are drawn from it uniformly
/// at random one at a time. The result order carries no meaning.
pub fn select_nearest<'a, R: Rng>(
    query: &FeatureVector,
    training: &'a [FeatureVector],
    k: usize,
    engine: &DistanceEngine<'_>,
    rng: &mut R,
) -> Result<Vec<NeighborDistance<'a>>, ClassifierError> {
    if k == 0 {
        return Err(ClassifierError::InvalidInput("k must be at least 1".into()));
    }
    if k > training.len() {
        return Err(ClassifierError::InvalidInput(format!(
            "k = {k} exceeds the training set size of {}",
            training.len()
        )));
    }

    let mut candidates = Vec::with_capacity(training.len());
    for instance in training {
        let distance = engine.distance(instance, query)?;
        candidates.push(NeighborDistance { instance, distance });
    }

    let mut selected: Vec<NeighborDistance<'a>> = Vec::with_capacity(k);
    while selected.len() < k {
        let minimum = candidates
            .iter()
            .map(|n| n.distance)
            .fold(f64::INFINITY, f64::min);
        let tied: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, n)| n.distance == minimum)
            .map(|(i, _)| i)
            .collect();

        if selected.len() + tied.len() <= k {
            // Descending index order keeps the pending swap_removes valid.
            for index in tied.into_iter().rev() {
                selected.push(candidates.swap_remove(index));
            }
        } else {
            let pick = tied[rng.random_range(0..tied.len())];
            selected.push(candidates.swap_remove(pick));
        }
    }

    Ok(selected)
}

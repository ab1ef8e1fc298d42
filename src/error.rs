use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The caller handed the classifier something it cannot work with:
    /// k outside `1..=|training set|`, predict before train, malformed
    /// rows, a class index outside the row bounds.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal consistency check failed. Reaching this variant with
    /// inputs that passed validation indicates a bug in the classifier,
    /// not a user error.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

use thiserror::Error;

/// Malformed detector output.
///
/// The tracker never tries to repair a bad frame; these are precondition
/// violations handed back to whoever produced the landmarks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("expected 21 landmarks per hand, got {0}")]
    WrongLandmarkCount(usize),

    #[error("expected landmark array of shape (21, 3), got ({rows}, {cols})")]
    WrongShape { rows: usize, cols: usize },

    #[error("expected {expected} flat coordinates, got {got}")]
    WrongFlatLength { expected: usize, got: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("at most 2 hands per frame are supported, got {0}")]
    TooManyHands(usize),
}

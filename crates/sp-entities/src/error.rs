//! Error types for entity generation.

use thiserror::Error;

/// Errors that can occur while generating a city's places.
#[derive(Debug, Error)]
pub enum EntityError {
    /// A house or hotel needed a neighbourhood but the city has none.
    /// Unreachable after the minimum-one clamp, still checked.
    #[error("no neighbourhoods to assign from")]
    NoNeighbourhoods,

    #[error("invalid neighbourhood weights: {0}")]
    BadWeights(#[from] rand::distributions::WeightedError),
}

/// Alias for `Result<T, EntityError>`.
pub type EntityResult<T> = Result<T, EntityError>;

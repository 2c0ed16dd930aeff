//! Error types for entity assignment.

use thiserror::Error;

/// Errors that can occur while assigning agents to places.
#[derive(Debug, Error)]
pub enum AssignError {
    /// A sample was requested from a pool with nothing in it — e.g. a city
    /// whose population produced zero schools while still holding students.
    /// The legacy generator silently handed out ID 0 here; that hid broken
    /// inputs, so it is a hard error now.
    #[error("city {city:?} has no {what} to sample from")]
    EmptyPool { city: String, what: &'static str },

    #[error("city {0:?} has no travel weight map")]
    MissingTravelWeights(String),

    #[error("travel weights for city {0:?} are empty or sum to <= 0")]
    UnusableTravelWeights(String),

    #[error("city {0:?} has no travel probability entry")]
    MissingTravelProbability(String),

    #[error("invalid destination weights: {0}")]
    BadWeights(#[from] rand::distributions::WeightedError),
}

/// Alias for `Result<T, AssignError>`.
pub type AssignResult<T> = Result<T, AssignError>;

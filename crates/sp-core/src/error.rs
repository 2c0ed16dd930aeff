//! Scenario validation errors.
//!
//! Sub-crates define their own error enums (`EntityError`, `AssignError`,
//! `OutputError`) and the binary stitches them together with `anyhow`;
//! `ConfigError` is the only error type the core crate itself produces.

use thiserror::Error;

/// A scenario that cannot be generated from.
///
/// Every variant corresponds to an input the legacy scripts would
/// have turned into a runtime index error, a division by zero, or a
/// silently wrong dataset.  [`Scenario::validate`](crate::Scenario::validate)
/// rejects all of them before any sampling happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scenario has no cities")]
    NoCities,

    #[error("infectivity list is empty")]
    NoInfectivities,

    #[error("{what} capacity must be positive")]
    ZeroCapacity { what: &'static str },

    #[error("city {city:?}: initial infected ({infected}) exceeds population ({population})")]
    InfectedExceedsPopulation {
        city:       String,
        infected:   u64,
        population: u64,
    },

    #[error("bounding box is degenerate: min {min} >= max {max}")]
    DegenerateBounds { min: f64, max: f64 },

    #[error("essential workspace portion {0} is outside [0, 1]")]
    EssentialPortionOutOfRange(f64),

    #[error("cross-city flat assignment requires exactly 2 cities, got {0}")]
    CrossCityNeedsTwoCities(usize),

    #[error("city {0:?} has no travel weight map")]
    MissingTravelWeights(String),

    #[error("city {0:?} has no travel probability entry")]
    MissingTravelProbability(String),

    #[error("travel weights for city {0:?} are empty or sum to <= 0")]
    UnusableTravelWeights(String),
}

/// Shorthand result type for scenario validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

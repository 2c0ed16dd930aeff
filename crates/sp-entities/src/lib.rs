//! `sp-entities` — place generation for one city at a time.
//!
//! Entity counts are a deterministic function of the city's population
//! (integer division by per-kind capacities); positions are random within
//! the scenario bounding box; each house and hotel is attached to a
//! neighbourhood by stochastic inverse-square-distance weighting.
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`entity`]    | `House`, `Hotel`, `Office`, `Neighbourhood`, pools     |
//! | [`generator`] | `entity_counts`, `generate_entities`                   |
//! | [`spatial`]   | `assign_neighbourhood` weighted sampler                |
//! | [`error`]     | `EntityError`, `EntityResult`                          |

pub mod entity;
pub mod error;
pub mod generator;
pub mod spatial;

#[cfg(test)]
mod tests;

pub use entity::{CityEntities, Hotel, House, Neighbourhood, Office};
pub use error::{EntityError, EntityResult};
pub use generator::{EntityCounts, entity_counts, generate_entities};
pub use spatial::assign_neighbourhood;

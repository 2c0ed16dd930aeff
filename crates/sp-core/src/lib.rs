//! `sp-core` — foundational types for the `synthpop` population generator.
//!
//! This crate is a dependency of every other `sp-*` crate.  It intentionally
//! has no `sp-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `HouseId`, `HotelId`, `OfficeId`, …        |
//! | [`geo`]         | `Position`, `BoundingBox`, squared distance           |
//! | [`infectivity`] | `Infectivity` enum                                    |
//! | [`rng`]         | `GenRng` — the run's single seeded generator          |
//! | [`config`]      | `Scenario`, `CityConfig`, `TravelModel`, validation   |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod infectivity;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Capacities, CityConfig, CrossCityTravel, Scenario, TravelModel};
pub use error::{ConfigError, ConfigResult};
pub use geo::{BoundingBox, Position};
pub use ids::{AgentId, HotelId, HouseId, IdCounters, NeighbourhoodId, OfficeId, SchoolId};
pub use infectivity::Infectivity;
pub use rng::GenRng;

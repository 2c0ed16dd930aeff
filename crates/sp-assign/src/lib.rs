//! `sp-assign` — mapping agents onto concrete place IDs.
//!
//! Place assignment is a uniform random draw from each pool, deliberately
//! unrelated to the inverse-square weighting that attached houses to
//! neighbourhoods: where an agent lives is spatial, *which* house record it
//! gets is not.
//!
//! Two variants match the two output schemas:
//!
//! | Module     | Variant     | Output shape                                 |
//! |------------|-------------|----------------------------------------------|
//! | [`local`]  | Flat        | one office/hotel per agent, flat columns     |
//! | [`travel`] | Cross-city  | per-destination-city maps + a travel city    |

pub mod error;
pub mod local;
pub mod travel;


pub use error::{AssignError, AssignResult};
pub use local::{LocalAssignment, assign_local};
pub use travel::{CityAssignment, CrossCityAssignment, assign_cross_city, normalized_destinations};

use sp_core::GenRng;

/// Uniform draw from a pool, with the empty case surfaced as an error
/// instead of the legacy silent zero.
pub(crate) fn pick<'a, T>(
    pool: &'a [T],
    city: &str,
    what: &'static str,
    rng:  &mut GenRng,
) -> AssignResult<&'a T> {
    rng.choose(pool).ok_or_else(|| AssignError::EmptyPool {
        city: city.to_owned(),
        what,
    })
}

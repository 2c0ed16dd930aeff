//! Stochastic neighbourhood assignment.
//!
//! A place joins a neighbourhood with probability proportional to
//! `1 / (squared distance + ε)`.  Nearer neighbourhoods are strongly
//! favored but never certain — this is deliberately a weighted sample,
//! not a nearest-neighbour search, so clusters keep a soft boundary.

use rand::distributions::{Distribution, WeightedIndex};

use sp_core::{GenRng, NeighbourhoodId, Position};

use crate::entity::Neighbourhood;
use crate::error::{EntityError, EntityResult};

/// Keeps the weight finite when a place lands exactly on a grid point.
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// Pick a neighbourhood for `position` by inverse-square-distance weighting.
pub fn assign_neighbourhood(
    position:       Position,
    neighbourhoods: &[Neighbourhood],
    rng:            &mut GenRng,
) -> EntityResult<NeighbourhoodId> {
    if neighbourhoods.is_empty() {
        return Err(EntityError::NoNeighbourhoods);
    }

    let weights = neighbourhoods
        .iter()
        .map(|n| 1.0 / (position.squared_distance(n.position) + DISTANCE_EPSILON));

    let index = WeightedIndex::new(weights)?.sample(rng.inner());
    Ok(neighbourhoods[index].id)
}

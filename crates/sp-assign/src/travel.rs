//! Cross-city assignment: per-destination maps and a sampled travel city.

use std::collections::BTreeMap;

use rand::distributions::{Distribution, WeightedIndex};

use sp_core::{
    CityConfig, CrossCityTravel, GenRng, HotelId, HouseId, NeighbourhoodId, OfficeId, SchoolId,
};
use sp_entities::CityEntities;
use sp_population::Agent;

use crate::error::{AssignError, AssignResult};
use crate::pick;

/// What one agent gets in one destination city.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CityAssignment {
    /// Workers get a uniformly chosen office; `None` otherwise.
    pub office: Option<OfficeId>,

    /// Essential flag of the chosen office; `false` for non-workers.
    pub is_essential_worker: bool,

    /// Every agent gets a hotel in every city.
    pub hotel:               HotelId,
    pub hotel_neighbourhood: NeighbourhoodId,

    /// Daily probability of travelling while a worker; 0 for others.
    pub travel_probability: f64,

    /// Trip duration in days (uniform across cities, from the travel table).
    pub travels_for_days: u32,
}

/// Per-agent result of the cross-city variant: a home house/school plus one
/// [`CityAssignment`] per configured city, keyed by city name.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossCityAssignment {
    pub house:               HouseId,
    pub house_neighbourhood: NeighbourhoodId,
    pub school:              Option<SchoolId>,

    /// One entry per configured city, own city included.
    pub by_city: BTreeMap<String, CityAssignment>,

    /// Destination sampled from the home city's normalized weight row.
    pub travel_city: String,
}

// ── Destination sampling ──────────────────────────────────────────────────────

/// The destination-weight row for `city`, normalized to sum to 1.
///
/// Pairs keep the `BTreeMap` iteration order, so the same scenario always
/// builds the same distribution.
pub fn normalized_destinations(
    travel: &CrossCityTravel,
    city:   &str,
) -> AssignResult<Vec<(String, f64)>> {
    let row = travel
        .weights
        .get(city)
        .ok_or_else(|| AssignError::MissingTravelWeights(city.to_owned()))?;

    let total: f64 = row.values().sum();
    if row.is_empty() || total <= 0.0 {
        return Err(AssignError::UnusableTravelWeights(city.to_owned()));
    }

    Ok(row
        .iter()
        .map(|(name, weight)| (name.clone(), weight / total))
        .collect())
}

// ── Assignment ────────────────────────────────────────────────────────────────

/// Assign every agent of one city a home house/school and a full per-city
/// travel map, then sample its travel destination.
pub fn assign_cross_city(
    agents:     &[Agent],
    cities:     &[CityConfig],
    city_index: usize,
    entities:   &[CityEntities],
    travel:     &CrossCityTravel,
    rng:        &mut GenRng,
) -> AssignResult<Vec<CrossCityAssignment>> {
    let own = &entities[city_index];
    let own_name = cities[city_index].name.as_str();

    let destinations = normalized_destinations(travel, own_name)?;
    let destination_dist = WeightedIndex::new(destinations.iter().map(|(_, w)| *w))?;

    let mut assignments = Vec::with_capacity(agents.len());
    for agent in agents {
        let house = pick(&own.houses, own_name, "houses", rng)?;

        let school = if agent.is_student {
            Some(*pick(&own.schools, own_name, "schools", rng)?)
        } else {
            None
        };

        let mut by_city = BTreeMap::new();
        for (i, city) in cities.iter().enumerate() {
            let pools = &entities[i];

            let (office, is_essential_worker) = if agent.is_worker {
                let office = pick(&pools.offices, &city.name, "offices", rng)?;
                (Some(office.id), office.is_essential)
            } else {
                (None, false)
            };

            let hotel = pick(&pools.hotels, &city.name, "hotels", rng)?;

            let travel_probability = if agent.is_worker {
                travel
                    .daily_probability
                    .get(&city.name)
                    .copied()
                    .ok_or_else(|| AssignError::MissingTravelProbability(city.name.clone()))?
            } else {
                0.0
            };

            by_city.insert(
                city.name.clone(),
                CityAssignment {
                    office,
                    is_essential_worker,
                    hotel:               hotel.id,
                    hotel_neighbourhood: hotel.neighbourhood,
                    travel_probability,
                    travels_for_days:    travel.duration_days,
                },
            );
        }

        let travel_city = destinations[destination_dist.sample(rng.inner())].0.clone();

        assignments.push(CrossCityAssignment {
            house: house.id,
            house_neighbourhood: house.neighbourhood,
            school,
            by_city,
            travel_city,
        });
    }

    Ok(assignments)
}

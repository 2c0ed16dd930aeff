//! Flat (single-schema) assignment: one place of each kind per agent.

use sp_core::{CityConfig, GenRng, HotelId, HouseId, NeighbourhoodId, OfficeId, SchoolId};
use sp_entities::CityEntities;
use sp_population::Agent;

use crate::error::AssignResult;
use crate::pick;

/// Trip length in the flat variant; every agent travels for a week.
const TRAVELS_FOR_DAYS: u32 = 7;
/// Flat-variant agents always travel.
const TRAVEL_PROBABILITY: f64 = 1.0;

/// Per-agent result of the flat variant.  `None` means the role does not
/// apply (students have no office, workers no school); writers encode it
/// as the legacy `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalAssignment {
    pub house:               HouseId,
    pub house_neighbourhood: NeighbourhoodId,
    pub office:              Option<OfficeId>,
    pub is_essential_worker: bool,
    pub school:              Option<SchoolId>,
    pub hotel:               HotelId,
    pub hotel_neighbourhood: NeighbourhoodId,
    pub travel_office:       Option<OfficeId>,
    pub travels_for_days:    u32,
    pub travel_probability:  f64,
}

/// Assign every agent of one city a house, hotel, and role-dependent
/// office/school, all by uniform random choice.
///
/// With `cross_city` set (two-city runs only, enforced by scenario
/// validation) hotels and travel offices come from the *other* city's
/// pools, modelling agents who always travel to the partner city.
pub fn assign_local(
    agents:     &[Agent],
    cities:     &[CityConfig],
    city_index: usize,
    entities:   &[CityEntities],
    cross_city: bool,
    rng:        &mut GenRng,
) -> AssignResult<Vec<LocalAssignment>> {
    let own = &entities[city_index];
    let own_name = cities[city_index].name.as_str();

    let partner_index = if cross_city { 1 - city_index } else { city_index };
    let partner = &entities[partner_index];
    let partner_name = cities[partner_index].name.as_str();

    let mut assignments = Vec::with_capacity(agents.len());
    for agent in agents {
        let house = pick(&own.houses, own_name, "houses", rng)?;
        let hotel = pick(&partner.hotels, partner_name, "hotels", rng)?;

        let (office, is_essential_worker, travel_office) = if agent.is_worker {
            let office = pick(&own.offices, own_name, "offices", rng)?;
            let travel_office = pick(&partner.offices, partner_name, "offices", rng)?;
            (Some(office.id), office.is_essential, Some(travel_office.id))
        } else {
            (None, false, None)
        };

        let school = if agent.is_student {
            Some(*pick(&own.schools, own_name, "schools", rng)?)
        } else {
            None
        };

        assignments.push(LocalAssignment {
            house:               house.id,
            house_neighbourhood: house.neighbourhood,
            office,
            is_essential_worker,
            school,
            hotel:               hotel.id,
            hotel_neighbourhood: hotel.neighbourhood,
            travel_office,
            travels_for_days:    TRAVELS_FOR_DAYS,
            travel_probability:  TRAVEL_PROBABILITY,
        });
    }

    Ok(assignments)
}

//! Entity generation for one city.

use sp_core::{Capacities, GenRng, IdCounters, Position, Scenario};
use sp_population::Agent;

use crate::entity::{CityEntities, Hotel, House, Neighbourhood, Office};
use crate::error::EntityResult;
use crate::spatial::assign_neighbourhood;

// ── EntityCounts ──────────────────────────────────────────────────────────────

/// How many of each place a city gets.
///
/// A pure function of the population and the capacities — no randomness —
/// so re-running a scenario always produces the same counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntityCounts {
    pub houses:         u64,
    pub hotels:         u64,
    pub offices:        u64,
    pub schools:        u64,
    pub neighbourhoods: u64,
}

/// Derive entity counts by integer division of the (role-filtered)
/// population by per-kind capacities.
///
/// The neighbourhood count is clamped to a minimum of 1: small populations
/// would otherwise divide down to zero and leave houses with nothing to
/// attach to.  Single-compartment mode collapses everything to one of each.
pub fn entity_counts(
    agents:             &[Agent],
    capacities:         &Capacities,
    single_compartment: bool,
) -> EntityCounts {
    if single_compartment {
        return EntityCounts {
            houses:         1,
            hotels:         1,
            offices:        1,
            schools:        1,
            neighbourhoods: 1,
        };
    }

    let total = agents.len() as u64;
    let workers = agents.iter().filter(|a| a.is_worker).count() as u64;
    let students = agents.iter().filter(|a| a.is_student).count() as u64;

    let houses = total / capacities.household;
    EntityCounts {
        houses,
        hotels:         total / capacities.hotel,
        offices:        workers / capacities.office,
        schools:        students / capacities.school,
        neighbourhoods: (houses / capacities.neighbourhood).max(1),
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Generate all places for one city and attach houses and hotels to
/// neighbourhoods.
///
/// IDs are drawn from the shared running `counters`, keeping them unique
/// across cities.
pub fn generate_entities(
    scenario: &Scenario,
    agents:   &[Agent],
    counters: &mut IdCounters,
    rng:      &mut GenRng,
) -> EntityResult<CityEntities> {
    let counts = entity_counts(agents, &scenario.capacities, scenario.single_compartment);

    let neighbourhoods = neighbourhood_grid(counts.neighbourhoods, scenario, counters);

    let mut houses = Vec::with_capacity(counts.houses as usize);
    for _ in 0..counts.houses {
        let position = scenario.bounds.sample(rng);
        let neighbourhood = assign_neighbourhood(position, &neighbourhoods, rng)?;
        houses.push(House {
            id: counters.next_house(),
            position,
            neighbourhood,
        });
    }

    let mut hotels = Vec::with_capacity(counts.hotels as usize);
    for _ in 0..counts.hotels {
        let position = scenario.bounds.sample(rng);
        let neighbourhood = assign_neighbourhood(position, &neighbourhoods, rng)?;
        hotels.push(Hotel {
            id: counters.next_hotel(),
            position,
            neighbourhood,
        });
    }

    let offices = (0..counts.offices)
        .map(|_| Office {
            id:           counters.next_office(),
            is_essential: rng.gen_bool(scenario.essential_portion),
        })
        .collect();

    let schools = (0..counts.schools).map(|_| counters.next_school()).collect();

    Ok(CityEntities {
        houses,
        hotels,
        offices,
        schools,
        neighbourhoods,
    })
}

/// Lay `count` neighbourhoods out on a square grid spanning the bounding
/// box, row-major with `ceil(sqrt(count))` cells per side.  A lone
/// neighbourhood sits at the box centre.
fn neighbourhood_grid(
    count:    u64,
    scenario: &Scenario,
    counters: &mut IdCounters,
) -> Vec<Neighbourhood> {
    let bounds = scenario.bounds;
    let per_side = (count as f64).sqrt().ceil() as u64;

    if per_side <= 1 {
        return vec![Neighbourhood {
            id:       counters.next_neighbourhood(),
            position: bounds.center(),
        }];
    }

    let step = bounds.extent() / (per_side - 1) as f64;
    (0..count)
        .map(|i| Neighbourhood {
            id:       counters.next_neighbourhood(),
            position: Position::new(
                bounds.min + step * (i % per_side) as f64,
                bounds.min + step * (i / per_side) as f64,
            ),
        })
        .collect()
}

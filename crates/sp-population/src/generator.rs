//! Population generation: one pass, one agent per iteration.

use sp_core::{CityConfig, GenRng, IdCounters, Infectivity, Scenario};

use crate::agent::Agent;

/// Age bounds (exclusive upper).  Single-compartment mode narrows the range
/// so every agent classifies as a worker.
const AGE_RANGE: std::ops::Range<u32> = 5..60;
const AGE_RANGE_SINGLE_COMPARTMENT: std::ops::Range<u32> = 20..60;

/// Age at and above which an agent is a worker; below it, a student.
pub const WORKING_AGE: u32 = 18;

/// Generate `city.population` agents for one city.
///
/// Purely generative — there are no failure modes once the scenario has
/// passed [`Scenario::validate`].  Agent IDs come from the shared running
/// counter, so calling this for successive cities never reuses an ID.
pub fn generate_population(
    scenario: &Scenario,
    city:     &CityConfig,
    counters: &mut IdCounters,
    rng:      &mut GenRng,
) -> Vec<Agent> {
    let age_range = if scenario.single_compartment {
        AGE_RANGE_SINGLE_COMPARTMENT
    } else {
        AGE_RANGE
    };

    let mut agents = Vec::with_capacity(city.population as usize);
    for i in 0..city.population {
        let age = rng.gen_range(age_range.clone());
        let infectivity = rng
            .choose(&scenario.infectivities)
            .copied()
            .unwrap_or(Infectivity::Normal);

        agents.push(Agent {
            id:          counters.next_agent(),
            age,
            is_worker:   age >= WORKING_AGE,
            is_student:  age < WORKING_AGE,
            compliance:  rng.gen_range(0.0..1.0),
            infectivity,
            infected:    i < city.initial_infected,
        });
    }

    agents
}

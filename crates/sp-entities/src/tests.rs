//! Unit tests for entity generation and spatial assignment.

#[cfg(test)]
mod support {
    use sp_core::{AgentId, Infectivity};
    use sp_population::Agent;

    /// An agent with the given age and default everything else.
    pub fn agent(id: u64, age: u32) -> Agent {
        Agent {
            id:          AgentId(id),
            age,
            is_worker:   age >= 18,
            is_student:  age < 18,
            compliance:  0.5,
            infectivity: Infectivity::Normal,
            infected:    false,
        }
    }

    /// `workers` adults and `students` minors.
    pub fn population(workers: u64, students: u64) -> Vec<Agent> {
        let mut agents = Vec::new();
        for i in 0..workers {
            agents.push(agent(i + 1, 30));
        }
        for i in 0..students {
            agents.push(agent(workers + i + 1, 10));
        }
        agents
    }
}

#[cfg(test)]
mod counts {
    use sp_core::Capacities;

    use super::support::population;
    use crate::entity_counts;

    #[test]
    fn houses_from_household_size() {
        // 100,000 agents at household size 4 → exactly 25,000 houses.
        let agents = population(100_000, 0);
        let counts = entity_counts(&agents, &Capacities::default(), false);
        assert_eq!(counts.houses, 25_000);
        assert_eq!(counts.hotels, 1_000);
    }

    #[test]
    fn offices_and_schools_follow_roles() {
        let agents = population(1_000, 450);
        let counts = entity_counts(&agents, &Capacities::default(), false);
        assert_eq!(counts.offices, 10); // 1000 workers / 100
        assert_eq!(counts.schools, 3); // 450 students / 150
    }

    #[test]
    fn neighbourhoods_clamp_to_one() {
        // 400 agents → 100 houses → 100/1000 == 0, clamped.
        let agents = population(400, 0);
        let counts = entity_counts(&agents, &Capacities::default(), false);
        assert_eq!(counts.neighbourhoods, 1);
    }

    #[test]
    fn single_compartment_collapses_everything() {
        let agents = population(100_000, 50_000);
        let counts = entity_counts(&agents, &Capacities::default(), true);
        assert_eq!(
            (counts.houses, counts.hotels, counts.offices, counts.schools, counts.neighbourhoods),
            (1, 1, 1, 1, 1)
        );
    }

    #[test]
    fn counts_are_deterministic() {
        let agents = population(4_321, 1_234);
        let a = entity_counts(&agents, &Capacities::default(), false);
        let b = entity_counts(&agents, &Capacities::default(), false);
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod generation {
    use std::collections::HashSet;

    use sp_core::{CityConfig, GenRng, IdCounters, Scenario};

    use super::support::population;
    use crate::generate_entities;

    fn scenario() -> Scenario {
        Scenario::with_cities(vec![CityConfig::new("Mumbai", 0, 0)])
    }

    #[test]
    fn every_house_and_hotel_has_a_generated_neighbourhood() {
        let agents = population(8_000, 2_000);
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(1);
        let entities = generate_entities(&scenario(), &agents, &mut counters, &mut rng).unwrap();

        let known: HashSet<_> = entities.neighbourhoods.iter().map(|n| n.id).collect();
        assert!(!known.is_empty());
        for house in &entities.houses {
            assert!(known.contains(&house.neighbourhood), "{}", house.id);
        }
        for hotel in &entities.hotels {
            assert!(known.contains(&hotel.neighbourhood), "{}", hotel.id);
        }
    }

    #[test]
    fn ids_never_collide_across_cities() {
        let agents_a = population(4_000, 1_000);
        let agents_b = population(2_000, 500);
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(2);
        let s = scenario();

        let a = generate_entities(&s, &agents_a, &mut counters, &mut rng).unwrap();
        let b = generate_entities(&s, &agents_b, &mut counters, &mut rng).unwrap();

        let mut house_ids: Vec<u32> =
            a.houses.iter().chain(&b.houses).map(|h| h.id.0).collect();
        house_ids.sort_unstable();
        house_ids.dedup();
        assert_eq!(house_ids.len(), a.houses.len() + b.houses.len());

        // Second city's houses continue where the first left off.
        assert_eq!(b.houses[0].id.0, a.houses.len() as u32 + 1);

        let mut office_ids: Vec<u32> =
            a.offices.iter().chain(&b.offices).map(|o| o.id.0).collect();
        office_ids.sort_unstable();
        office_ids.dedup();
        assert_eq!(office_ids.len(), a.offices.len() + b.offices.len());
    }

    #[test]
    fn positions_stay_inside_bounds() {
        let agents = population(8_000, 0);
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(3);
        let s = scenario();
        let entities = generate_entities(&s, &agents, &mut counters, &mut rng).unwrap();

        for house in &entities.houses {
            assert!(s.bounds.contains(house.position));
        }
        for n in &entities.neighbourhoods {
            assert!(s.bounds.contains(n.position), "grid point {} escaped", n.position);
        }
    }

    #[test]
    fn grid_points_stay_inside_bounds_for_non_square_counts() {
        // 5 neighbourhoods: needs 5,000 houses → 20,000 agents per 1,000-house cells... easier
        // to shrink the neighbourhood capacity instead.
        let agents = population(2_000, 0);
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(4);
        let mut s = scenario();
        s.capacities.neighbourhood = 100; // 500 houses / 100 = 5 neighbourhoods
        let entities = generate_entities(&s, &agents, &mut counters, &mut rng).unwrap();

        assert_eq!(entities.neighbourhoods.len(), 5);
        for n in &entities.neighbourhoods {
            assert!(s.bounds.contains(n.position), "grid point {} escaped", n.position);
        }
    }

    #[test]
    fn lone_neighbourhood_sits_at_box_center() {
        let agents = population(400, 0);
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(5);
        let s = scenario();
        let entities = generate_entities(&s, &agents, &mut counters, &mut rng).unwrap();

        assert_eq!(entities.neighbourhoods.len(), 1);
        assert_eq!(entities.neighbourhoods[0].position, s.bounds.center());
    }

    #[test]
    fn essential_portion_extremes() {
        let agents = population(10_000, 0);
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(6);
        let mut s = scenario();

        s.essential_portion = 0.0;
        let none = generate_entities(&s, &agents, &mut counters, &mut rng).unwrap();
        assert!(none.offices.iter().all(|o| !o.is_essential));

        s.essential_portion = 1.0;
        let all = generate_entities(&s, &agents, &mut counters, &mut rng).unwrap();
        assert!(all.offices.iter().all(|o| o.is_essential));
    }
}

#[cfg(test)]
mod spatial {
    use sp_core::{GenRng, IdCounters, NeighbourhoodId, Position};

    use crate::entity::Neighbourhood;
    use crate::error::EntityError;
    use crate::spatial::assign_neighbourhood;

    fn grid_2x2() -> Vec<Neighbourhood> {
        let mut counters = IdCounters::new();
        [(0.0, 0.0), (90.0, 0.0), (0.0, 90.0), (90.0, 90.0)]
            .into_iter()
            .map(|(lat, lon)| Neighbourhood {
                id:       counters.next_neighbourhood(),
                position: Position::new(lat, lon),
            })
            .collect()
    }

    #[test]
    fn empty_slice_is_an_error() {
        let mut rng = GenRng::new(0);
        let result = assign_neighbourhood(Position::new(1.0, 1.0), &[], &mut rng);
        assert!(matches!(result, Err(EntityError::NoNeighbourhoods)));
    }

    #[test]
    fn heavily_favors_the_nearest_cell() {
        let grid = grid_2x2();
        let mut rng = GenRng::new(42);
        // Right on top of the first grid point: weight 1/ε vs ~1/8100.
        let here = Position::new(0.0, 0.0);

        let mut hits = 0;
        for _ in 0..1_000 {
            if assign_neighbourhood(here, &grid, &mut rng).unwrap() == NeighbourhoodId(1) {
                hits += 1;
            }
        }
        assert!(hits > 990, "expected near-certain local assignment, got {hits}/1000");
    }

    #[test]
    fn distant_cells_still_get_sampled() {
        let grid = grid_2x2();
        let mut rng = GenRng::new(7);
        // Equidistant-ish point: all four cells should appear over many draws.
        let mid = Position::new(45.0, 45.0);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(assign_neighbourhood(mid, &grid, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 4, "weighted choice collapsed to {seen:?}");
    }

    #[test]
    fn colocated_grid_points_do_not_panic() {
        // Two neighbourhoods on the same spot: ε keeps both weights finite.
        let mut counters = IdCounters::new();
        let grid: Vec<Neighbourhood> = (0..2)
            .map(|_| Neighbourhood {
                id:       counters.next_neighbourhood(),
                position: Position::new(45.0, 45.0),
            })
            .collect();
        let mut rng = GenRng::new(9);
        assign_neighbourhood(Position::new(45.0, 45.0), &grid, &mut rng).unwrap();
    }
}

//! Unit tests for population generation.

#[cfg(test)]
mod generator {
    use sp_core::{CityConfig, GenRng, IdCounters, Infectivity, Scenario};

    use crate::generate_population;

    fn scenario(population: u64, initial_infected: u64) -> Scenario {
        Scenario::with_cities(vec![CityConfig::new("Mumbai", population, initial_infected)])
    }

    fn generate(scenario: &Scenario) -> Vec<crate::Agent> {
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(scenario.seed);
        generate_population(scenario, &scenario.cities[0], &mut counters, &mut rng)
    }

    #[test]
    fn generates_requested_count() {
        let agents = generate(&scenario(5_000, 0));
        assert_eq!(agents.len(), 5_000);
    }

    #[test]
    fn worker_student_mutually_exclusive_and_exhaustive() {
        for agent in generate(&scenario(10_000, 0)) {
            assert_ne!(agent.is_worker, agent.is_student, "agent {}", agent.id);
            if agent.age >= 18 {
                assert!(agent.is_worker);
            } else {
                assert!(agent.is_student);
            }
        }
    }

    #[test]
    fn ages_within_default_range() {
        for agent in generate(&scenario(10_000, 0)) {
            assert!((5..60).contains(&agent.age), "age {}", agent.age);
        }
    }

    #[test]
    fn single_compartment_narrows_ages() {
        let mut s = scenario(10_000, 0);
        s.single_compartment = true;
        for agent in generate(&s) {
            assert!((20..60).contains(&agent.age), "age {}", agent.age);
            assert!(agent.is_worker, "single-compartment agents are all workers");
        }
    }

    #[test]
    fn exact_initial_infected_count() {
        // The default Mumbai run: 200k population, 200 seeded infections.
        let agents = generate(&scenario(200_000, 200));
        let infected = agents.iter().filter(|a| a.infected).count();
        assert_eq!(infected, 200);
        // The first rows carry the infections.
        assert!(agents[..200].iter().all(|a| a.infected));
        assert!(agents[200..].iter().all(|a| !a.infected));
    }

    #[test]
    fn compliance_in_unit_interval() {
        for agent in generate(&scenario(2_000, 0)) {
            assert!((0.0..=1.0).contains(&agent.compliance));
        }
    }

    #[test]
    fn infectivity_sampled_from_configured_list() {
        let mut s = scenario(2_000, 0);
        s.infectivities = vec![Infectivity::High];
        for agent in generate(&s) {
            assert_eq!(agent.infectivity, Infectivity::High);
        }
    }

    #[test]
    fn agent_ids_unique_across_cities() {
        let s = Scenario::with_cities(vec![
            CityConfig::new("A", 1_000, 0),
            CityConfig::new("B", 300, 0),
        ]);
        let mut counters = IdCounters::new();
        let mut rng = GenRng::new(0);
        let a = generate_population(&s, &s.cities[0], &mut counters, &mut rng);
        let b = generate_population(&s, &s.cities[1], &mut counters, &mut rng);

        let mut ids: Vec<u64> = a.iter().chain(&b).map(|agent| agent.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 1_300, "agent IDs collided across cities");
        // Continuous from 1 with no gaps.
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&1_300));
    }

    #[test]
    fn same_seed_reproduces_population() {
        let s = scenario(1_000, 10);
        assert_eq!(generate(&s), generate(&s));
    }
}

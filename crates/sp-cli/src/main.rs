//! synthpop — generate a synthetic population snapshot for epidemic
//! simulation.
//!
//! The scenario is defined in constants below, like the knobs at the top of
//! the legacy scripts: edit and re-run.  The default reproduces the
//! single-city Mumbai dataset (200k agents, 200 seeded infections) with the
//! full three-city travel tables, so `TravelCity` still gets sampled from
//! the real destination weights.

mod pipeline;


use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::Result;

use sp_core::{CityConfig, CrossCityTravel, Scenario, TravelModel};

use pipeline::{generate_dataset, write_dataset};

// ── Scenario constants ────────────────────────────────────────────────────────

const SEED:          u64  = 42;
const SAVE_ENTITIES: bool = false;
const OUTPUT_DIR:    &str = "output";

fn scenario() -> Scenario {
    let cities = vec![
        CityConfig::new("Mumbai", 200 * 1000, 200),
        // Extend as needed:
        // CityConfig::new("Nashik", 22 * 1000, 0),
        // CityConfig::new("Pune", 70 * 1000, 0),
    ];

    let travel = CrossCityTravel {
        weights: BTreeMap::from([
            (
                "Mumbai".to_owned(),
                BTreeMap::from([("Nashik".to_owned(), 0.95), ("Pune".to_owned(), 0.05)]),
            ),
            (
                "Nashik".to_owned(),
                BTreeMap::from([("Mumbai".to_owned(), 0.1), ("Pune".to_owned(), 0.1)]),
            ),
            (
                "Pune".to_owned(),
                BTreeMap::from([("Mumbai".to_owned(), 0.05), ("Nashik".to_owned(), 0.95)]),
            ),
        ]),
        daily_probability: BTreeMap::from([
            ("Mumbai".to_owned(), 0.0067547619),
            ("Nashik".to_owned(), 0.00909090909),
            ("Pune".to_owned(), 0.0114285714),
        ]),
        duration_days: 7,
    };

    let mut scenario = Scenario::with_cities(cities);
    scenario.travel = TravelModel::CrossCity(travel);
    scenario.save_entities = SAVE_ENTITIES;
    scenario.seed = SEED;
    scenario
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let scenario = scenario();

    println!("=== synthpop — synthetic population generator ===");
    println!(
        "Cities: {}  |  Agents: {}  |  Seed: {}",
        scenario.cities.len(),
        scenario.total_population(),
        scenario.seed
    );
    println!();

    let t0 = Instant::now();
    let dataset = generate_dataset(&scenario)?;

    for city in &dataset.cities {
        println!(
            "{:<10} {:>9} agents  {:>8} houses  {:>6} hotels  {:>6} offices  {:>5} schools  {:>4} neighbourhoods",
            city.name,
            city.agents.len(),
            city.entities.houses.len(),
            city.entities.hotels.len(),
            city.entities.offices.len(),
            city.entities.schools.len(),
            city.entities.neighbourhoods.len(),
        );
    }

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let report = write_dataset(&scenario, &dataset, std::path::Path::new(OUTPUT_DIR))?;
    let elapsed = t0.elapsed();

    println!();
    println!("Wrote {} rows to {}", report.rows, report.csv_path.display());
    if let Some(json_path) = &report.json_path {
        println!("Entity dump at {}", json_path.display());
    }
    println!("Done in {:.3} s", elapsed.as_secs_f64());

    Ok(())
}

//! The single-pass generation pipeline.
//!
//! Two phases over the city list, mirroring the data dependency: entity
//! pools for *every* city must exist before cross-city assignment can
//! sample offices and hotels in destination cities.
//!
//!   1. per city: generate population, then entities (shared ID counters)
//!   2. per city: assign agents to places (variant per travel model)
//!
//! Writing happens separately in [`write_dataset`] so tests can inspect
//! the in-memory [`Dataset`] without touching the filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use sp_assign::{CrossCityAssignment, LocalAssignment, assign_cross_city, assign_local};
use sp_core::{GenRng, IdCounters, Scenario, TravelModel};
use sp_entities::{CityEntities, generate_entities};
use sp_output::{FlatCsvWriter, TravelCsvWriter, output_stem, write_entities_json};
use sp_population::{Agent, generate_population};

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Per-agent assignments for one city, shaped by the scenario's travel model.
#[derive(Clone, Debug, PartialEq)]
pub enum Assignments {
    Flat(Vec<LocalAssignment>),
    CrossCity(Vec<CrossCityAssignment>),
}

impl Assignments {
    pub fn len(&self) -> usize {
        match self {
            Assignments::Flat(v) => v.len(),
            Assignments::CrossCity(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything generated for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct CityDataset {
    pub name:        String,
    pub agents:      Vec<Agent>,
    pub entities:    CityEntities,
    pub assignments: Assignments,
}

/// The full in-memory result of a run, one entry per configured city.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub cities: Vec<CityDataset>,
}

impl Dataset {
    /// Total agent rows across all cities.
    pub fn total_rows(&self) -> usize {
        self.cities.iter().map(|c| c.agents.len()).sum()
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Validate the scenario and run both generation phases.
pub fn generate_dataset(scenario: &Scenario) -> Result<Dataset> {
    scenario.validate().context("invalid scenario")?;

    let mut rng = GenRng::new(scenario.seed);
    let mut counters = IdCounters::new();

    // Phase 1: populations and entity pools, all cities.
    let mut populations = Vec::with_capacity(scenario.cities.len());
    let mut entities = Vec::with_capacity(scenario.cities.len());
    for city in &scenario.cities {
        let agents = generate_population(scenario, city, &mut counters, &mut rng);
        let pools = generate_entities(scenario, &agents, &mut counters, &mut rng)
            .with_context(|| format!("generating entities for {}", city.name))?;
        populations.push(agents);
        entities.push(pools);
    }

    // Phase 2: assignment, per travel model.
    let mut cities = Vec::with_capacity(scenario.cities.len());
    for (index, (city, agents)) in scenario.cities.iter().zip(populations).enumerate() {
        let assignments = match &scenario.travel {
            TravelModel::Flat { cross_city } => Assignments::Flat(
                assign_local(&agents, &scenario.cities, index, &entities, *cross_city, &mut rng)
                    .with_context(|| format!("assigning places in {}", city.name))?,
            ),
            TravelModel::CrossCity(travel) => Assignments::CrossCity(
                assign_cross_city(&agents, &scenario.cities, index, &entities, travel, &mut rng)
                    .with_context(|| format!("assigning places in {}", city.name))?,
            ),
        };

        cities.push(CityDataset {
            name: city.name.clone(),
            agents,
            entities: entities[index].clone(),
            assignments,
        });
    }

    Ok(Dataset { cities })
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Where a run's files ended up.
#[derive(Debug)]
pub struct WriteReport {
    pub csv_path:  PathBuf,
    pub json_path: Option<PathBuf>,
    pub rows:      usize,
}

/// Serialize a dataset into `dir` using the scenario's naming scheme.
pub fn write_dataset(scenario: &Scenario, dataset: &Dataset, dir: &Path) -> Result<WriteReport> {
    let stem = output_stem(scenario);
    let csv_path = dir.join(format!("{stem}.csv"));

    match &scenario.travel {
        TravelModel::Flat { .. } => {
            let mut writer = FlatCsvWriter::create(&csv_path)?;
            for city in &dataset.cities {
                let Assignments::Flat(assignments) = &city.assignments else {
                    anyhow::bail!("flat scenario produced cross-city assignments");
                };
                writer.write_city(&city.name, &city.agents, assignments)?;
            }
            writer.finish()?;
        }
        TravelModel::CrossCity(_) => {
            let mut writer = TravelCsvWriter::create(&csv_path)?;
            for city in &dataset.cities {
                let Assignments::CrossCity(assignments) = &city.assignments else {
                    anyhow::bail!("cross-city scenario produced flat assignments");
                };
                writer.write_city(&city.name, &city.agents, assignments)?;
            }
            writer.finish()?;
        }
    }

    let json_path = if scenario.save_entities {
        let path = dir.join(format!("{stem}.json"));
        write_entities_json(
            &path,
            dataset.cities.iter().map(|c| (c.name.as_str(), &c.entities)),
        )?;
        Some(path)
    } else {
        None
    };

    Ok(WriteReport {
        csv_path,
        json_path,
        rows: dataset.total_rows(),
    })
}

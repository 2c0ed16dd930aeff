//! Scenario configuration.
//!
//! The legacy generator kept its knobs in module-level constants; here
//! they form one explicit [`Scenario`] struct that is validated up front
//! and passed by reference to every generation stage.  Nothing downstream
//! re-checks what [`Scenario::validate`] already guarantees.

use std::collections::BTreeMap;

use crate::error::{ConfigError, ConfigResult};
use crate::geo::BoundingBox;
use crate::infectivity::Infectivity;

// ── CityConfig ────────────────────────────────────────────────────────────────

/// Per-city inputs: name, how many agents to generate, and how many of them
/// start infected.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CityConfig {
    pub name:             String,
    pub population:       u64,
    pub initial_infected: u64,
}

impl CityConfig {
    pub fn new(name: impl Into<String>, population: u64, initial_infected: u64) -> Self {
        Self {
            name: name.into(),
            population,
            initial_infected,
        }
    }
}

// ── Capacities ────────────────────────────────────────────────────────────────

/// How many agents each kind of place absorbs.  Entity counts are derived
/// from these by integer division of the (role-filtered) population.
#[derive(Copy, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Capacities {
    /// Agents per household.
    pub household: u64,
    /// Workers per office.
    pub office: u64,
    /// Students per school.
    pub school: u64,
    /// Agents per hotel.
    pub hotel: u64,
    /// Houses per neighbourhood.
    pub neighbourhood: u64,
}

impl Default for Capacities {
    /// The legacy constants: 4 / 100 / 150 / 100 / 1000.
    fn default() -> Self {
        Self {
            household:     4,
            office:        100,
            school:        150,
            hotel:         100,
            neighbourhood: 1000,
        }
    }
}

// ── TravelModel ───────────────────────────────────────────────────────────────

/// Inter-city travel tables for the cross-city assignment variant.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct CrossCityTravel {
    /// Source city → (destination city → unnormalized weight).  Each agent's
    /// travel destination is sampled from the normalized weights of its home
    /// city's row.
    pub weights: BTreeMap<String, BTreeMap<String, f64>>,

    /// Per-city daily travel probability, applied to workers only.
    pub daily_probability: BTreeMap<String, f64>,

    /// How many days a trip lasts.  The legacy value is 7.
    pub duration_days: u32,
}

/// Which of the two assignment variants a run uses.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum TravelModel {
    /// One office/hotel per agent, flat CSV columns.  With `cross_city` set
    /// (exactly 2 cities), hotels and travel offices are drawn from the
    /// *other* city's pools.
    Flat { cross_city: bool },

    /// Per-agent office/hotel/travel maps over every configured city, plus a
    /// sampled travel destination.
    CrossCity(CrossCityTravel),
}

impl Default for TravelModel {
    fn default() -> Self {
        TravelModel::Flat { cross_city: false }
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Everything a generation run needs, in one place.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    pub cities: Vec<CityConfig>,

    pub capacities: Capacities,

    /// Probability that a generated office is flagged essential.
    pub essential_portion: f64,

    /// Collapse every city to a single house/hotel/office/school/neighbourhood
    /// and narrow the age range to 20..60 (all workers).
    pub single_compartment: bool,

    /// Categories agents' infectivity is sampled from (uniformly).
    pub infectivities: Vec<Infectivity>,

    /// Square extent positions are sampled in.
    pub bounds: BoundingBox,

    pub travel: TravelModel,

    /// Also dump the generated entity pools as JSON next to the CSV.
    pub save_entities: bool,

    /// Master RNG seed; the same scenario and seed reproduce the dataset.
    pub seed: u64,
}

impl Scenario {
    /// A scenario with the legacy defaults and the given cities; callers
    /// override individual fields afterwards.
    pub fn with_cities(cities: Vec<CityConfig>) -> Self {
        Self {
            cities,
            capacities:         Capacities::default(),
            essential_portion:  0.1,
            single_compartment: false,
            infectivities:      vec![Infectivity::Normal],
            bounds:             BoundingBox::default(),
            travel:             TravelModel::default(),
            save_entities:      false,
            seed:               0,
        }
    }

    /// Sum of all city populations.
    pub fn total_population(&self) -> u64 {
        self.cities.iter().map(|c| c.population).sum()
    }

    /// Reject any scenario the generation stages cannot handle.
    ///
    /// Called once, before any sampling; downstream code relies on the
    /// guarantees established here (non-empty city list, matching travel
    /// tables, positive capacities, …).
    pub fn validate(&self) -> ConfigResult<()> {
        if self.cities.is_empty() {
            return Err(ConfigError::NoCities);
        }
        if self.infectivities.is_empty() {
            return Err(ConfigError::NoInfectivities);
        }

        let caps = [
            ("household", self.capacities.household),
            ("office", self.capacities.office),
            ("school", self.capacities.school),
            ("hotel", self.capacities.hotel),
            ("neighbourhood", self.capacities.neighbourhood),
        ];
        for (what, value) in caps {
            if value == 0 {
                return Err(ConfigError::ZeroCapacity { what });
            }
        }

        if self.bounds.min >= self.bounds.max {
            return Err(ConfigError::DegenerateBounds {
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        if !(0.0..=1.0).contains(&self.essential_portion) {
            return Err(ConfigError::EssentialPortionOutOfRange(self.essential_portion));
        }

        for city in &self.cities {
            if city.initial_infected > city.population {
                return Err(ConfigError::InfectedExceedsPopulation {
                    city:       city.name.clone(),
                    infected:   city.initial_infected,
                    population: city.population,
                });
            }
        }

        match &self.travel {
            TravelModel::Flat { cross_city } => {
                if *cross_city && self.cities.len() != 2 {
                    return Err(ConfigError::CrossCityNeedsTwoCities(self.cities.len()));
                }
            }
            TravelModel::CrossCity(travel) => {
                for city in &self.cities {
                    let Some(weights) = travel.weights.get(&city.name) else {
                        return Err(ConfigError::MissingTravelWeights(city.name.clone()));
                    };
                    if weights.is_empty() || weights.values().sum::<f64>() <= 0.0 {
                        return Err(ConfigError::UnusableTravelWeights(city.name.clone()));
                    }
                    if !travel.daily_probability.contains_key(&city.name) {
                        return Err(ConfigError::MissingTravelProbability(city.name.clone()));
                    }
                }
            }
        }

        Ok(())
    }
}

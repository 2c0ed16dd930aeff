//! Output file naming.
//!
//! The stem encodes the configuration so datasets are self-describing on
//! disk, using the exact legacy schemes:
//!
//! - flat variant: concatenated mode flags and the per-city population,
//!   e.g. `Dummy5000k`, `TwoCitiesSingleCompartment200k`
//! - cross-city variant: `Ncities_{n}_{p1}k_..._{pn}k`,
//!   e.g. `Ncities_3_210k_22k_70k`

use sp_core::{Scenario, TravelModel};

/// File stem (no extension) for a scenario's outputs.
pub fn output_stem(scenario: &Scenario) -> String {
    match &scenario.travel {
        TravelModel::Flat { cross_city } => {
            let mut stem = String::new();
            if *cross_city {
                stem.push_str("TwoCities");
            }
            if scenario.single_compartment {
                stem.push_str("SingleCompartment");
            }
            if scenario.infectivities.len() > 1 {
                stem.push_str("MultipleInfectivities");
            }
            if stem.is_empty() {
                stem.push_str("Dummy");
            }
            // The flat variant historically ran every city at the same
            // population, so the stem names it once.
            let per_city = scenario.cities.first().map_or(0, |c| c.population);
            stem.push_str(&format!("{}k", per_city / 1000));
            stem
        }

        TravelModel::CrossCity(_) => {
            let pops: Vec<String> = scenario
                .cities
                .iter()
                .map(|c| format!("{}k", c.population / 1000))
                .collect();
            format!("Ncities_{}_{}", scenario.cities.len(), pops.join("_"))
        }
    }
}

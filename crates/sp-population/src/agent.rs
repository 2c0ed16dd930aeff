//! The per-person demographic record.

use sp_core::{AgentId, Infectivity};

/// One generated person, before place assignment.
///
/// Populations are held as one `Vec<Agent>` per city; the city itself is
/// not stored on the record (the pipeline carries it alongside), so a
/// 5-million-agent city costs no per-row string.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Agent {
    /// Globally unique across all cities of the run.
    pub id: AgentId,

    /// Uniform in 5..60, or 20..60 in single-compartment mode.
    pub age: u32,

    /// `age >= 18`.  Workers get offices; exactly one of
    /// `is_worker`/`is_student` holds for every agent.
    pub is_worker: bool,

    /// `age < 18`.  Students get schools.
    pub is_student: bool,

    /// Uniform in [0, 1]; how well the agent follows interventions.
    pub compliance: f64,

    pub infectivity: Infectivity,

    /// The first `initial_infected` agents of each city start infected.
    pub infected: bool,
}

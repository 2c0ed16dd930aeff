//! Serde row views over one agent, matching the legacy CSV schemas.
//!
//! Column names and order are load-bearing: the downstream simulator reads
//! these files by header.  `Option` sentinels become `0` here, and the
//! per-city maps of the cross-city variant become JSON-encoded text cells
//! (the in-memory model stays structured; only this edge flattens it).

use std::collections::BTreeMap;

use sp_assign::{CrossCityAssignment, LocalAssignment};
use sp_core::{AgentId, Infectivity};
use sp_population::Agent;

use crate::error::OutputResult;

// ── FlatRow ───────────────────────────────────────────────────────────────────

/// One CSV row of the flat (single-office-per-agent) schema.
#[derive(Debug, serde::Serialize)]
pub struct FlatRow<'a> {
    #[serde(rename = "City")]
    pub city: &'a str,
    #[serde(rename = "AgentID")]
    pub agent_id: AgentId,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "IsWorker")]
    pub is_worker: bool,
    #[serde(rename = "IsStudent")]
    pub is_student: bool,
    #[serde(rename = "Compliance")]
    pub compliance: f64,
    #[serde(rename = "Infectivity")]
    pub infectivity: Infectivity,
    #[serde(rename = "HouseID")]
    pub house_id: u32,
    #[serde(rename = "OfficeID")]
    pub office_id: u32,
    #[serde(rename = "SchoolID")]
    pub school_id: u32,
    #[serde(rename = "HotelID")]
    pub hotel_id: u32,
    #[serde(rename = "TravelOfficeID")]
    pub travel_office_id: u32,
    #[serde(rename = "TravelsFor")]
    pub travels_for: u32,
    #[serde(rename = "TravelProbability")]
    pub travel_probability: f64,
    #[serde(rename = "HouseNeighbourhoodID")]
    pub house_neighbourhood_id: u32,
    #[serde(rename = "HotelNeighbourhoodID")]
    pub hotel_neighbourhood_id: u32,
    #[serde(rename = "Infected")]
    pub infected: u8,
    #[serde(rename = "IsEssentialWorker")]
    pub is_essential_worker: u8,
}

impl<'a> FlatRow<'a> {
    pub fn new(city: &'a str, agent: &Agent, assignment: &LocalAssignment) -> Self {
        Self {
            city,
            agent_id:                agent.id,
            age:                     agent.age,
            is_worker:               agent.is_worker,
            is_student:              agent.is_student,
            compliance:              agent.compliance,
            infectivity:             agent.infectivity,
            house_id:                assignment.house.0,
            office_id:               assignment.office.map_or(0, |o| o.0),
            school_id:               assignment.school.map_or(0, |s| s.0),
            hotel_id:                assignment.hotel.0,
            travel_office_id:        assignment.travel_office.map_or(0, |o| o.0),
            travels_for:             assignment.travels_for_days,
            travel_probability:      assignment.travel_probability,
            house_neighbourhood_id:  assignment.house_neighbourhood.0,
            hotel_neighbourhood_id:  assignment.hotel_neighbourhood.0,
            infected:                agent.infected as u8,
            is_essential_worker:     assignment.is_essential_worker as u8,
        }
    }
}

// ── TravelRow ─────────────────────────────────────────────────────────────────

/// One CSV row of the cross-city schema.  The `*IDs`/`*Map` cells hold JSON
/// objects keyed by city name.
#[derive(Debug, serde::Serialize)]
pub struct TravelRow<'a> {
    #[serde(rename = "City")]
    pub city: &'a str,
    #[serde(rename = "AgentID")]
    pub agent_id: AgentId,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "IsWorker")]
    pub is_worker: bool,
    #[serde(rename = "IsStudent")]
    pub is_student: bool,
    #[serde(rename = "Compliance")]
    pub compliance: f64,
    #[serde(rename = "Infectivity")]
    pub infectivity: Infectivity,
    #[serde(rename = "HouseID")]
    pub house_id: u32,
    #[serde(rename = "HouseNeighbourhoodID")]
    pub house_neighbourhood_id: u32,
    #[serde(rename = "SchoolID")]
    pub school_id: u32,
    #[serde(rename = "OfficeIDs")]
    pub office_ids: String,
    #[serde(rename = "HotelIDs")]
    pub hotel_ids: String,
    #[serde(rename = "HotelNeighbourhoodIDs")]
    pub hotel_neighbourhood_ids: String,
    #[serde(rename = "TravelProbabilities")]
    pub travel_probabilities: String,
    #[serde(rename = "TravelsFor")]
    pub travels_for: String,
    #[serde(rename = "IsEssentialWorkerMap")]
    pub is_essential_worker_map: String,
    #[serde(rename = "TravelCity")]
    pub travel_city: &'a str,
    #[serde(rename = "Infected")]
    pub infected: u8,
}

impl<'a> TravelRow<'a> {
    /// Flatten one agent's structured per-city maps into JSON cells.
    ///
    /// Fails only if JSON encoding does, which for these value types means
    /// never in practice — the `Result` is for writer-loop uniformity.
    pub fn new(
        city:       &'a str,
        agent:      &Agent,
        assignment: &'a CrossCityAssignment,
    ) -> OutputResult<Self> {
        Ok(Self {
            city,
            agent_id:                agent.id,
            age:                     agent.age,
            is_worker:               agent.is_worker,
            is_student:              agent.is_student,
            compliance:              agent.compliance,
            infectivity:             agent.infectivity,
            house_id:                assignment.house.0,
            house_neighbourhood_id:  assignment.house_neighbourhood.0,
            school_id:               assignment.school.map_or(0, |s| s.0),
            office_ids:              json_column(assignment, |a| a.office.map_or(0, |o| o.0))?,
            hotel_ids:               json_column(assignment, |a| a.hotel.0)?,
            hotel_neighbourhood_ids: json_column(assignment, |a| a.hotel_neighbourhood.0)?,
            travel_probabilities:    json_column(assignment, |a| a.travel_probability)?,
            travels_for:             json_column(assignment, |a| a.travels_for_days)?,
            is_essential_worker_map: json_column(assignment, |a| a.is_essential_worker as u8)?,
            travel_city:             &assignment.travel_city,
            infected:                agent.infected as u8,
        })
    }
}

/// Project one field out of every per-city assignment and JSON-encode the
/// resulting city-keyed map.
fn json_column<V: serde::Serialize>(
    assignment: &CrossCityAssignment,
    field:      impl Fn(&sp_assign::CityAssignment) -> V,
) -> OutputResult<String> {
    let map: BTreeMap<&str, V> = assignment
        .by_city
        .iter()
        .map(|(name, per_city)| (name.as_str(), field(per_city)))
        .collect();
    Ok(serde_json::to_string(&map)?)
}

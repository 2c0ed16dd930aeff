//! Place record types and the per-city pools.
//!
//! Serde field names mirror the legacy output format (`HouseID`,
//! `isEssential`, …) so the optional entity JSON dump stays drop-in
//! compatible with the legacy generator's files.

use sp_core::{HotelId, HouseId, NeighbourhoodId, OfficeId, Position, SchoolId};

/// A household with a position and its assigned neighbourhood.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct House {
    #[serde(rename = "HouseID")]
    pub id: HouseId,

    #[serde(flatten)]
    pub position: Position,

    #[serde(rename = "NeighbourhoodID")]
    pub neighbourhood: NeighbourhoodId,
}

/// A hotel; structurally identical to a house but drawn from its own ID
/// space and pool.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Hotel {
    #[serde(rename = "HotelID")]
    pub id: HotelId,

    #[serde(flatten)]
    pub position: Position,

    #[serde(rename = "NeighbourhoodID")]
    pub neighbourhood: NeighbourhoodId,
}

/// A workplace.  Offices carry no position; only the essential flag matters
/// downstream.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Office {
    #[serde(rename = "OfficeID")]
    pub id: OfficeId,

    #[serde(rename = "isEssential")]
    pub is_essential: bool,
}

/// A neighbourhood cell on the synthetic grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Neighbourhood {
    #[serde(rename = "NeighbourhoodID")]
    pub id: NeighbourhoodId,

    #[serde(flatten)]
    pub position: Position,
}

// ── CityEntities ──────────────────────────────────────────────────────────────

/// All places generated for one city.  Schools are bare IDs — they have no
/// attributes of their own.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CityEntities {
    pub houses:         Vec<House>,
    pub hotels:         Vec<Hotel>,
    pub offices:        Vec<Office>,
    pub schools:        Vec<SchoolId>,
    pub neighbourhoods: Vec<Neighbourhood>,
}

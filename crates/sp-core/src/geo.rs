//! Synthetic geographic coordinates.
//!
//! Positions are uniform random points inside a configured square bounding
//! box — no real geography is involved, so plain Euclidean math on the raw
//! degree values is the right tool.  `f64` keeps the inverse-square weights
//! of the neighbourhood assigner well conditioned even for near-coincident
//! points.

use crate::rng::GenRng;

/// A synthetic coordinate inside the scenario bounding box.
///
/// Serialized field names match the legacy output format (`Latitude`,
/// `Longitude`) so entity JSON dumps stay drop-in compatible.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl Position {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Squared Euclidean distance in degrees².
    ///
    /// The neighbourhood assigner only ever needs relative weights, so the
    /// square root is never taken.
    #[inline]
    pub fn squared_distance(self, other: Position) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        d_lat * d_lat + d_lon * d_lon
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// The square lat/long extent places are sampled from.
///
/// Both axes share the same `[min, max]` range, like the legacy generator's
/// single `MIN_LATLONG`/`MAX_LATLONG` pair.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub min: f64,
    pub max: f64,
}

impl BoundingBox {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Side length in degrees.
    #[inline]
    pub fn extent(self) -> f64 {
        self.max - self.min
    }

    /// Centre point of the box.
    #[inline]
    pub fn center(self) -> Position {
        let mid = self.min + self.extent() * 0.5;
        Position::new(mid, mid)
    }

    /// Sample a uniform random position inside the box.
    pub fn sample(self, rng: &mut GenRng) -> Position {
        Position::new(
            rng.gen_range(self.min..self.max),
            rng.gen_range(self.min..self.max),
        )
    }

    /// `true` if `p` lies inside the box (inclusive bounds).
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        (self.min..=self.max).contains(&p.latitude) && (self.min..=self.max).contains(&p.longitude)
    }
}

impl Default for BoundingBox {
    /// The legacy 0–90° square.
    fn default() -> Self {
        Self { min: 0.0, max: 90.0 }
    }
}

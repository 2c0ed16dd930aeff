//! Strongly typed, zero-cost identifier wrappers and the cross-city counters.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; serde
//! serializes the newtype transparently, so a `HouseId(7)` lands in CSV and
//! JSON output as plain `7`.
//!
//! IDs start at 1 within a run.  The downstream simulator reads `0` as
//! "no such place" (a student has no office, a worker no school), so 0 is
//! never handed out by [`IdCounters`].

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Globally unique agent identifier.  `u64` because a multi-city run can
    /// exceed the `u32` range (several cities of millions each).
    pub struct AgentId(u64);
}

typed_id! {
    /// Identifier of a household.
    pub struct HouseId(u32);
}

typed_id! {
    /// Identifier of a hotel.
    pub struct HotelId(u32);
}

typed_id! {
    /// Identifier of a workplace.
    pub struct OfficeId(u32);
}

typed_id! {
    /// Identifier of a school.
    pub struct SchoolId(u32);
}

typed_id! {
    /// Identifier of a neighbourhood.
    pub struct NeighbourhoodId(u32);
}

// ── IdCounters ────────────────────────────────────────────────────────────────

/// Running ID counters shared across cities.
///
/// One instance lives for the whole run; each `next_*` call hands out the
/// next free ID of that kind.  Because every city draws from the same
/// counters, IDs of a given kind never collide across cities — the
/// uniqueness invariant the output format relies on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdCounters {
    agents:         u64,
    houses:         u32,
    hotels:         u32,
    offices:        u32,
    schools:        u32,
    neighbourhoods: u32,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_agent(&mut self) -> AgentId {
        self.agents += 1;
        AgentId(self.agents)
    }

    pub fn next_house(&mut self) -> HouseId {
        self.houses += 1;
        HouseId(self.houses)
    }

    pub fn next_hotel(&mut self) -> HotelId {
        self.hotels += 1;
        HotelId(self.hotels)
    }

    pub fn next_office(&mut self) -> OfficeId {
        self.offices += 1;
        OfficeId(self.offices)
    }

    pub fn next_school(&mut self) -> SchoolId {
        self.schools += 1;
        SchoolId(self.schools)
    }

    pub fn next_neighbourhood(&mut self) -> NeighbourhoodId {
        self.neighbourhoods += 1;
        NeighbourhoodId(self.neighbourhoods)
    }
}

//! Infectivity categories assigned to agents.

use std::fmt;

/// Categorical infectivity level, sampled uniformly from the scenario's
/// configured list.  Serializes as the bare category name (`"Normal"`,
/// `"High"`) to match the legacy CSV column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Infectivity {
    Normal,
    High,
}

impl Infectivity {
    pub fn as_str(self) -> &'static str {
        match self {
            Infectivity::Normal => "Normal",
            Infectivity::High => "High",
        }
    }
}

impl fmt::Display for Infectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! CSV output backends, one per schema.
//!
//! Headers come from the row structs' serde names and are emitted on the
//! first serialized row.  Both writers take one city at a time so the
//! pipeline can stream cities without holding the combined table.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use sp_assign::{CrossCityAssignment, LocalAssignment};
use sp_population::Agent;

use crate::error::{OutputError, OutputResult};
use crate::row::{FlatRow, TravelRow};

fn check_lengths(city: &str, agents: usize, assignments: usize) -> OutputResult<()> {
    if agents != assignments {
        return Err(OutputError::RowCountMismatch {
            city: city.to_owned(),
            agents,
            assignments,
        });
    }
    Ok(())
}

// ── FlatCsvWriter ─────────────────────────────────────────────────────────────

/// Writes the flat-schema population CSV.
pub struct FlatCsvWriter {
    inner:    Writer<File>,
    finished: bool,
}

impl FlatCsvWriter {
    /// Create (or truncate) the CSV file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self {
            inner:    Writer::from_path(path)?,
            finished: false,
        })
    }

    /// Append one city's agents, paired index-by-index with their
    /// assignments.
    pub fn write_city(
        &mut self,
        city:        &str,
        agents:      &[Agent],
        assignments: &[LocalAssignment],
    ) -> OutputResult<()> {
        check_lengths(city, agents.len(), assignments.len())?;
        for (agent, assignment) in agents.iter().zip(assignments) {
            self.inner.serialize(FlatRow::new(city, agent, assignment))?;
        }
        Ok(())
    }

    /// Flush buffered rows.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

// ── TravelCsvWriter ───────────────────────────────────────────────────────────

/// Writes the cross-city-schema population CSV.
pub struct TravelCsvWriter {
    inner:    Writer<File>,
    finished: bool,
}

impl TravelCsvWriter {
    /// Create (or truncate) the CSV file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self {
            inner:    Writer::from_path(path)?,
            finished: false,
        })
    }

    /// Append one city's agents, paired index-by-index with their
    /// assignments.
    pub fn write_city(
        &mut self,
        city:        &str,
        agents:      &[Agent],
        assignments: &[CrossCityAssignment],
    ) -> OutputResult<()> {
        check_lengths(city, agents.len(), assignments.len())?;
        for (agent, assignment) in agents.iter().zip(assignments) {
            self.inner.serialize(TravelRow::new(city, agent, assignment)?)?;
        }
        Ok(())
    }

    /// Flush buffered rows.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

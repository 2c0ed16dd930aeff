//! `sp-output` — serializing generated datasets to flat files.
//!
//! One CSV writer per assignment variant (the two schemas share nothing but
//! the demographic prefix), an opt-in JSON dump of the raw entity pools,
//! and the legacy file-stem naming scheme.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`row`]    | `FlatRow`, `TravelRow` — serde views over one agent   |
//! | [`csv`]    | `FlatCsvWriter`, `TravelCsvWriter`                    |
//! | [`json`]   | `write_entities_json`                                 |
//! | [`naming`] | `output_stem`                                         |
//! | [`error`]  | `OutputError`, `OutputResult`                         |

pub mod csv;
pub mod error;
pub mod json;
pub mod naming;
pub mod row;


pub use csv::{FlatCsvWriter, TravelCsvWriter};
pub use error::{OutputError, OutputResult};
pub use json::write_entities_json;
pub use naming::output_stem;
pub use row::{FlatRow, TravelRow};

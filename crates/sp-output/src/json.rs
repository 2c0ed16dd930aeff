//! Optional JSON dump of the raw entity pools.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use sp_entities::CityEntities;

use crate::error::OutputResult;

/// Write every city's entity pools as one pretty-printed JSON object keyed
/// by city name, keeping the shape the legacy generator dumped so existing
/// inspection tooling keeps working.
pub fn write_entities_json<'a>(
    path:   &Path,
    cities: impl IntoIterator<Item = (&'a str, &'a CityEntities)>,
) -> OutputResult<()> {
    let by_city: BTreeMap<&str, &CityEntities> = cities.into_iter().collect();
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &by_city)?;
    Ok(())
}

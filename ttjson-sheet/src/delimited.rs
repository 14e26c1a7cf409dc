use std::path::Path;

use anyhow::Context;
use csv::ReaderBuilder;
use ttjson_core::{Cell, Row};

pub(crate) fn read(path: &Path) -> anyhow::Result<Vec<Row>> {
  let mut reader = ReaderBuilder::new()
    .has_headers(true)
    .flexible(true)
    .from_path(path)
    .with_context(|| format!("Unable to open {} as CSV", path.display()))?;

  let headers = reader
    .headers()
    .with_context(|| format!("Unable to read CSV header of {}", path.display()))?
    .iter()
    .map(|header| header.trim_matches('\u{feff}').trim().to_string())
    .collect::<Vec<String>>();

  let mut rows: Vec<Row> = Vec::new();
  for record in reader.records() {
    let record = record.with_context(|| format!("Unable to read CSV record of {}", path.display()))?;

    rows.push(
      headers
        .iter()
        .zip(record.iter())
        .filter(|(header, _)| !header.is_empty())
        .map(|(header, value)| (header.clone(), Cell::from(value)))
        .collect(),
    );
  }

  Ok(rows)
}

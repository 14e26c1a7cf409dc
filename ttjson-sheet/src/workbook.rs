use std::path::Path;

use anyhow::{anyhow, Context};
use calamine::{open_workbook_auto, Data, Reader};
use ttjson_core::{Cell, Row};

/// Reads the first worksheet of an xlsx, xls, xlsb or ods file.
pub(crate) fn read(path: &Path) -> anyhow::Result<Vec<Row>> {
  let mut workbook = open_workbook_auto(path)
    .with_context(|| format!("Unable to open {} as workbook", path.display()))?;

  let sheet = workbook
    .sheet_names()
    .first()
    .cloned()
    .ok_or_else(|| anyhow!("Workbook {} has no worksheets", path.display()))?;

  let range = workbook
    .worksheet_range(&sheet)
    .with_context(|| format!("Unable to read worksheet {} of {}", sheet, path.display()))?;

  let mut lines = range.rows();
  let headers = match lines.next() {
    Some(header) => header
      .iter()
      .map(|data| cell(data).text())
      .collect::<Vec<String>>(),
    None => return Ok(Vec::new()),
  };

  Ok(
    lines
      .map(|line| {
        headers
          .iter()
          .zip(line)
          .filter(|(header, _)| !header.is_empty())
          .map(|(header, data)| (header.clone(), cell(data)))
          .collect::<Row>()
      })
      .collect(),
  )
}

fn cell(data: &Data) -> Cell {
  match data {
    Data::Int(value) => Cell::Number(*value as f64),
    Data::Float(value) => Cell::Number(*value),
    Data::String(value) => Cell::from(value.as_str()),
    Data::Bool(value) => Cell::Text(value.to_string()),
    Data::DateTime(value) => Cell::Text(value.to_string()),
    Data::DateTimeIso(value) | Data::DurationIso(value) => Cell::from(value.as_str()),
    Data::Error(_) | Data::Empty => Cell::Empty,
  }
}

#[cfg(test)]
mod test {
  use calamine::Data;
  use ttjson_core::Cell;

  use super::cell;

  #[test]
  fn converts_cells() {
    assert_eq!(cell(&Data::Float(101.0)).text(), "101");
    assert_eq!(cell(&Data::Int(7)), Cell::Number(7.0));
    assert_eq!(cell(&Data::String(" OS ".to_string())).text(), "OS");
    assert_eq!(cell(&Data::String(String::new())), Cell::Empty);
    assert_eq!(cell(&Data::Empty), Cell::Empty);
  }
}

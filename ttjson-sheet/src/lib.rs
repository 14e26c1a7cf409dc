use std::path::Path;

use anyhow::bail;
use tracing::{info, warn};
use ttjson_core::Row;

mod delimited;
mod workbook;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
  Workbook,
  Csv,
  Unknown,
}

impl Format {
  pub fn from_path(path: &Path) -> Self {
    let extension = path
      .extension()
      .and_then(|extension| extension.to_str())
      .map(str::to_ascii_lowercase);

    match extension.as_deref() {
      Some("xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods") => Format::Workbook,
      Some("csv") => Format::Csv,
      _ => Format::Unknown,
    }
  }
}

/// Reads the first worksheet (or the CSV file) at `path`. The first line
/// holds the column names, every following line becomes a [`Row`].
pub fn read_rows(path: &Path) -> anyhow::Result<Vec<Row>> {
  if !path.is_file() {
    bail!("Input file {} does not exist", path.display());
  }

  let rows = match Format::from_path(path) {
    Format::Workbook => workbook::read(path)?,
    Format::Csv => delimited::read(path)?,
    Format::Unknown => match workbook::read(path) {
      Ok(rows) => rows,
      Err(err) => {
        warn!("Reading {} as workbook failed ({:#}), trying CSV", path.display(), err);
        delimited::read(path)?
      }
    },
  };

  info!("Read {} rows from {}", rows.len(), path.display());

  Ok(rows)
}

#[cfg(test)]
mod test {
  use std::fs;
  use std::path::Path;

  use crate::{read_rows, Format};

  #[test]
  fn detects_format_from_extension() {
    assert_eq!(Format::from_path(Path::new("timetable_input.xlsx")), Format::Workbook);
    assert_eq!(Format::from_path(Path::new("6TH.ODS")), Format::Workbook);
    assert_eq!(Format::from_path(Path::new("export.csv")), Format::Csv);
    assert_eq!(Format::from_path(Path::new("export.txt")), Format::Unknown);
    assert_eq!(Format::from_path(Path::new("export")), Format::Unknown);
  }

  #[test]
  fn reads_csv() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("timetable.csv");
    fs::write(
      &path,
      "\u{feff}SECTION,DAY,8-9,ROOM1, 9-10 \n5A,MON,OS,B101,\n5B,TUE,,,CN\n",
    )?;

    let rows = read_rows(&path)?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text("SECTION"), "5A");
    assert_eq!(rows[0].text("ROOM1"), "B101");
    assert_eq!(rows[0].text("9-10"), "");
    assert_eq!(rows[1].text("9-10"), "CN");
    Ok(())
  }

  #[test]
  fn falls_back_to_csv_for_unknown_extension() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("timetable.txt");
    fs::write(&path, "Section,Day,8-9\n6A,FRI,AI\n")?;

    let rows = read_rows(&path)?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("8-9"), "AI");
    Ok(())
  }

  #[test]
  fn missing_input_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    assert!(read_rows(&dir.path().join("timetable_input.xlsx")).is_err());
    Ok(())
  }

  #[test]
  fn broken_workbook_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("timetable_input.xlsx");
    fs::write(&path, "not a workbook")?;

    assert!(read_rows(&path).is_err());
    Ok(())
  }
}

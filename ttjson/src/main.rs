use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;

use ttjson_core::{build, merge, Electives, MergeMode, Schema};
use ttjson_sheet::read_rows;
use ttjson_store::{load_electives, load_existing, load_schema, save_store};

use crate::summary::Summary;

mod summary;

#[derive(Parser)]
#[command(author, version, about, long_about)]
struct Args {
  /// Timetable spreadsheet (xlsx, xls, xlsb, ods or csv).
  #[arg(env = "TTJSON_INPUT", default_value = "timetable_input.xlsx")]
  input: PathBuf,
  /// `merge` keeps stored sections that are not in the input, `replace` drops them.
  #[arg(env = "TTJSON_MODE", default_value_t = MergeMode::Merge)]
  mode: MergeMode,
  #[arg(long, short, env = "TTJSON_SCHEMA", default_value = "sem6")]
  schema: String,
  /// JSON schema used instead of a built-in one.
  #[arg(long, env = "TTJSON_SCHEMA_FILE")]
  schema_file: Option<PathBuf>,
  #[arg(long, short, env = "TTJSON_OUTPUT")]
  output: Option<PathBuf>,
  #[arg(long, short, env = "TTJSON_ELECTIVES")]
  electives: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  tracing_subscriber::fmt::init();

  let summary = run(&args)?;
  print!("{summary}");

  Ok(())
}

fn run(args: &Args) -> anyhow::Result<Summary> {
  let schema = match &args.schema_file {
    Some(path) => load_schema(path)?,
    None => Schema::preset(&args.schema).cloned().ok_or_else(|| {
      anyhow!(
        "Unknown schema {}, expected one of {}",
        args.schema,
        Schema::preset_names().join(", ")
      )
    })?,
  };
  let output = args
    .output
    .clone()
    .unwrap_or_else(|| schema.store_path.clone());

  info!("Loading data from {} using schema {}", args.input.display(), schema.name);
  let rows = read_rows(&args.input)?;

  let electives = if schema.resolve_electives || args.electives.is_some() {
    load_electives(args.electives.as_deref().unwrap_or(&schema.elective_path))
  } else {
    Electives::default()
  };

  let new = build(&rows, &schema, &electives);
  let parsed = new.len();

  let existing = match args.mode {
    MergeMode::Merge => load_existing(&output),
    MergeMode::Replace => None,
  };
  let existing_len = existing.as_ref().map(|store| store.len());

  let store = merge(existing, new, args.mode);
  save_store(&output, &store)?;

  Ok(Summary {
    input: args.input.clone(),
    mode: args.mode,
    parsed,
    existing: existing_len,
    total: store.len(),
    output,
  })
}

#[cfg(test)]
mod test {
  use std::fs;
  use std::path::Path;

  use ttjson_core::MergeMode;

  use crate::{run, Args};

  fn args(dir: &Path, input: &str, mode: MergeMode) -> Args {
    Args {
      input: dir.join(input),
      mode,
      schema: "sem6".to_string(),
      schema_file: None,
      output: Some(dir.join("timetable_6th.json")),
      electives: Some(dir.join("section_pe3_data.json")),
    }
  }

  #[test]
  fn converts_and_merges_csv() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("section_pe3_data.json"), r#"{"6A": "NLP"}"#)?;
    fs::write(
      dir.path().join("first.csv"),
      "SECTION,DAY,8-9,9-10,ROOM1,ROOM2\n6 A,MON,PE-3,OS,C-12,\n6B,TUE,CN,X,B4,\n",
    )?;
    fs::write(
      dir.path().join("second.csv"),
      "Section,Day,8-9,ROOM1\n6B,WED (LAB),AI,L2\n6C,THU,,\n",
    )?;

    let first = run(&args(dir.path(), "first.csv", MergeMode::Merge))?;
    assert_eq!((first.parsed, first.existing, first.total), (2, None, 2));

    let second = run(&args(dir.path(), "second.csv", MergeMode::Merge))?;
    assert_eq!((second.parsed, second.existing, second.total), (1, Some(2), 2));

    let written = fs::read_to_string(dir.path().join("timetable_6th.json"))?;
    assert!(written.contains("\"6 A\""));
    assert!(written.contains("\"NLP\""));
    assert!(written.contains("\"Wednesday\""));
    assert!(!written.contains("\"Tuesday\""));
    assert!(!written.contains("6C"));

    let replaced = run(&args(dir.path(), "second.csv", MergeMode::Replace))?;
    assert_eq!((replaced.parsed, replaced.existing, replaced.total), (1, None, 1));
    Ok(())
  }

  #[test]
  fn corrupt_store_is_replaced() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("timetable_6th.json"), "not json")?;
    fs::write(dir.path().join("input.csv"), "SECTION,DAY,8-9\n6A,MON,OS\n")?;

    let summary = run(&args(dir.path(), "input.csv", MergeMode::Merge))?;

    assert_eq!((summary.existing, summary.total), (None, 1));
    Ok(())
  }

  #[test]
  fn missing_input_is_fatal() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    assert!(run(&args(dir.path(), "absent.xlsx", MergeMode::Merge)).is_err());
    assert!(!dir.path().join("timetable_6th.json").exists());
    Ok(())
  }

  #[test]
  fn unknown_schema_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("input.csv"), "SECTION,DAY,8-9\n6A,MON,OS\n")?;

    let mut args = args(dir.path(), "input.csv", MergeMode::Merge);
    args.schema = "sem9".to_string();

    assert!(run(&args).is_err());
    Ok(())
  }
}

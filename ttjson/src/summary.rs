use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use ttjson_core::MergeMode;

/// What a run did, printed once the store has been written.
pub(crate) struct Summary {
  pub(crate) input: PathBuf,
  pub(crate) mode: MergeMode,
  pub(crate) parsed: usize,
  pub(crate) existing: Option<usize>,
  pub(crate) total: usize,
  pub(crate) output: PathBuf,
}

impl Display for Summary {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(
      f,
      "Parsed {} sections from {}.",
      self.parsed,
      self.input.display()
    )?;

    match (self.mode, self.existing) {
      (MergeMode::Merge, Some(existing)) => {
        writeln!(f, "MERGE MODE: Found {} existing sections.", existing)?;
        writeln!(f, "Successfully merged. Total sections: {}", self.total)?;
      }
      (MergeMode::Merge, None) => {
        writeln!(f, "MERGE MODE: No readable existing file, starting fresh.")?;
        writeln!(f, "Total sections: {}", self.total)?;
      }
      (MergeMode::Replace, _) => {
        writeln!(f, "REPLACE MODE: Overwriting/Creating new file.")?;
        writeln!(f, "Total sections: {}", self.total)?;
      }
    }

    writeln!(f, "Saved to {}", self.output.display())
  }
}

#[cfg(test)]
mod test {
  use std::path::PathBuf;

  use ttjson_core::MergeMode;

  use crate::summary::Summary;

  fn summary(mode: MergeMode, existing: Option<usize>) -> Summary {
    Summary {
      input: PathBuf::from("timetable_input.xlsx"),
      mode,
      parsed: 3,
      existing,
      total: 5,
      output: PathBuf::from("timetable_6th.json"),
    }
  }

  #[test]
  fn merge_summary() {
    assert_eq!(
      summary(MergeMode::Merge, Some(4)).to_string(),
      "Parsed 3 sections from timetable_input.xlsx.\n\
       MERGE MODE: Found 4 existing sections.\n\
       Successfully merged. Total sections: 5\n\
       Saved to timetable_6th.json\n"
    );
  }

  #[test]
  fn replace_summary() {
    assert_eq!(
      summary(MergeMode::Replace, None).to_string(),
      "Parsed 3 sections from timetable_input.xlsx.\n\
       REPLACE MODE: Overwriting/Creating new file.\n\
       Total sections: 5\n\
       Saved to timetable_6th.json\n"
    );
  }

  #[test]
  fn fresh_merge_summary() {
    let text = summary(MergeMode::Merge, None).to_string();

    assert!(text.contains("starting fresh"));
    assert!(text.ends_with("Saved to timetable_6th.json\n"));
  }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{prune, Store};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
  /// Keep previously stored sections and overwrite the ones parsed again.
  #[default]
  Merge,
  /// Discard whatever was stored before.
  Replace,
}

impl FromStr for MergeMode {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value.trim().to_ascii_lowercase().as_str() {
      "merge" => Ok(MergeMode::Merge),
      "replace" => Ok(MergeMode::Replace),
      other => Err(format!("unknown mode {other:?}, expected merge or replace")),
    }
  }
}

impl Display for MergeMode {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      MergeMode::Merge => write!(f, "merge"),
      MergeMode::Replace => write!(f, "replace"),
    }
  }
}

/// Combines freshly parsed sections with the stored ones.
///
/// Sections are replaced as a whole, days and slots of a section are never
/// mixed between the two stores. `existing` is `None` when nothing could be
/// loaded, in which case the result is `new` in both modes.
pub fn merge(existing: Option<Store>, new: Store, mode: MergeMode) -> Store {
  let mut store = match (mode, existing) {
    (MergeMode::Merge, Some(mut existing)) => {
      existing.extend(new);
      existing
    }
    (MergeMode::Merge, None) | (MergeMode::Replace, _) => new,
  };

  prune(&mut store);
  store
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use cell::{Cell, Row};
pub use elective::Electives;
pub use merge::{merge, MergeMode};
pub use schema::{Schema, SentinelRoom, SlotSpec};
pub use transform::{transform, Transformed};

mod cell;
pub mod elective;
mod merge;
pub mod schema;
mod transform;

/// Slot label to entry, in the order the slots were configured.
pub type DayRecord = IndexMap<String, Entry>;

/// Day name to the lessons of that day.
pub type SectionTimetable = IndexMap<String, DayRecord>;

/// Section identifier to its timetable. This is what gets persisted.
pub type Store = IndexMap<String, SectionTimetable>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
  pub subject: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub room: Option<String>,
}

impl Entry {
  pub fn new(subject: impl Into<String>, room: Option<&str>) -> Self {
    Self {
      subject: subject.into(),
      room: room.map(str::to_string),
    }
  }
}

/// Transforms every row and collects the results per section and day.
///
/// A later row for the same section and day overwrites the slots it fills
/// and keeps the others. Empty days and sections are pruned.
pub fn build(rows: &[Row], schema: &Schema, electives: &Electives) -> Store {
  let mut store = Store::new();

  for row in rows {
    let Some(transformed) = transform(row, schema, electives) else {
      continue;
    };

    store
      .entry(transformed.section)
      .or_default()
      .entry(transformed.day)
      .or_default()
      .extend(transformed.record);
  }

  prune(&mut store);
  debug!("Built {} sections using schema {}", store.len(), schema.name);

  store
}

/// Removes days without entries and sections without days.
pub fn prune(store: &mut Store) {
  store.retain(|_, days| {
    days.retain(|_, slots| !slots.is_empty());
    !days.is_empty()
  });
}

use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::Weekday::{self, Friday, Monday, Saturday, Thursday, Tuesday, Wednesday};

pub use sem4::SEM4;
pub use sem6::{SEM6, SEM6_HSE};

mod sem4;
mod sem6;

static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new("\\(.*$").unwrap());

const WEEK: [(&str, Weekday); 6] = [
  ("MON", Monday),
  ("TUE", Tuesday),
  ("WED", Wednesday),
  ("THU", Thursday),
  ("FRI", Friday),
  ("SAT", Saturday),
];

/// Built-in schemas, selectable by name.
pub static PRESETS: Lazy<Vec<&'static Schema>> = Lazy::new(|| vec![&*SEM4, &*SEM6, &*SEM6_HSE]);

/// A time slot and the column its room code is read from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct SlotSpec {
  pub label: String,
  pub room_column: String,
}

impl SlotSpec {
  pub fn new(label: &str, room_column: &str) -> Self {
    Self {
      label: label.to_string(),
      room_column: room_column.to_string(),
    }
  }
}

impl From<(String, String)> for SlotSpec {
  fn from((label, room_column): (String, String)) -> Self {
    Self { label, room_column }
  }
}

impl From<SlotSpec> for (String, String) {
  fn from(slot: SlotSpec) -> Self {
    (slot.label, slot.room_column)
  }
}

/// Forces a fixed room for one subject whenever its room cell is blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelRoom {
  pub subject: String,
  pub room: String,
}

/// Per-institution layout of the input table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
  pub name: String,
  pub slots: Vec<SlotSpec>,
  pub days: IndexMap<String, String>,
  pub blank: HashSet<String>,
  pub section_columns: Vec<String>,
  pub day_columns: Vec<String>,
  pub sentinel_room: Option<SentinelRoom>,
  pub resolve_electives: bool,
  pub store_path: PathBuf,
  pub elective_path: PathBuf,
}

impl Default for Schema {
  fn default() -> Self {
    Self {
      name: "custom".to_string(),
      slots: Vec::new(),
      days: WEEK
        .iter()
        .map(|(code, day)| (code.to_string(), day.to_string()))
        .collect(),
      blank: blank_set(&["", "X", "---", "nan"]),
      section_columns: vec!["SECTION".to_string(), "Section".to_string()],
      day_columns: vec!["DAY".to_string(), "Day".to_string()],
      sentinel_room: None,
      resolve_electives: true,
      store_path: PathBuf::from("timetable.json"),
      elective_path: PathBuf::from("section_pe3_data.json"),
    }
  }
}

impl Schema {
  pub fn preset(name: &str) -> Option<&'static Schema> {
    PRESETS.iter().copied().find(|schema| schema.name == name)
  }

  pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|schema| schema.name.as_str()).collect()
  }

  /// Empty values and `nan` are always blank, whatever the configured set says.
  pub fn is_blank(&self, value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan") || self.blank.contains(value)
  }

  /// Maps an upper-cased day code like `MON (odd weeks)` to `Monday`.
  /// Unknown codes come back unchanged, without their annotation.
  pub fn day_name(&self, code: &str) -> String {
    let code = ANNOTATION.replace(code, "");
    let code = code.trim();

    match self.days.get(code) {
      Some(name) => name.clone(),
      None => code.to_string(),
    }
  }

  /// Room forced for `subject` when its own room cell is blank.
  pub fn sentinel_room(&self, subject: &str) -> Option<&str> {
    self
      .sentinel_room
      .as_ref()
      .filter(|sentinel| sentinel.subject == subject)
      .map(|sentinel| sentinel.room.as_str())
  }
}

fn blank_set(values: &[&str]) -> HashSet<String> {
  values.iter().map(|value| value.to_string()).collect()
}

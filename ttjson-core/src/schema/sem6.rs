use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::schema::{blank_set, Schema, SentinelRoom, SlotSpec};

/// Sixth semester layout with one room column per slot. `HSE` is dropped
/// like an empty cell.
pub static SEM6: Lazy<Schema> = Lazy::new(|| Schema {
  name: "sem6".to_string(),
  slots: vec![
    SlotSpec::new("8-9", "ROOM1"),
    SlotSpec::new("9-10", "ROOM2"),
    SlotSpec::new("10-11", "ROOM3"),
    SlotSpec::new("11-12", "ROOM4"),
    SlotSpec::new("12-1", "ROOM5"),
    SlotSpec::new("1-2", "ROOM6"),
    SlotSpec::new("2-3", "ROOM7"),
    SlotSpec::new("3-4", "ROOM8"),
    SlotSpec::new("4-5", "ROOM9"),
    SlotSpec::new("5-6", "ROOM10"),
  ],
  blank: blank_set(&["", "X", "---", "nan", "NaN", "HSE"]),
  resolve_electives: true,
  store_path: PathBuf::from("timetable_6th.json"),
  elective_path: PathBuf::from("section_pe3_data.json"),
  ..Schema::default()
});

/// Sixth semester layout that keeps `HSE` lessons and places them in the
/// `HSE` room unless the sheet names one.
pub static SEM6_HSE: Lazy<Schema> = Lazy::new(|| Schema {
  name: "sem6-hse".to_string(),
  blank: blank_set(&["", "X", "---", "nan", "NaN"]),
  sentinel_room: Some(SentinelRoom {
    subject: "HSE".to_string(),
    room: "HSE".to_string(),
  }),
  ..(*SEM6).clone()
});

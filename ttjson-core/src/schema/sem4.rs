use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::schema::{blank_set, Schema, SlotSpec};

/// Fourth semester layout. Adjacent slots share a room column and no
/// electives are taught.
pub static SEM4: Lazy<Schema> = Lazy::new(|| Schema {
  name: "sem4".to_string(),
  slots: vec![
    SlotSpec::new("8-9", "ROOM1"),
    SlotSpec::new("9-10", "ROOM2"),
    SlotSpec::new("10-11", "ROOM2"),
    SlotSpec::new("11-12", "ROOM3"),
    SlotSpec::new("12-1", "ROOM4"),
    SlotSpec::new("1-2", "ROOM4"),
    SlotSpec::new("2-3", "ROOM5"),
    SlotSpec::new("3.00-4.00", "ROOM6"),
    SlotSpec::new("4.00-5.00", "ROOM7"),
    SlotSpec::new("5.00-6.00", "ROOM7"),
  ],
  blank: blank_set(&["", "X", "---", "nan"]),
  resolve_electives: false,
  store_path: PathBuf::from("timetable_4th.json"),
  ..Schema::default()
});

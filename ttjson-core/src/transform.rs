use tracing::debug;

use crate::{DayRecord, Electives, Entry, Row, Schema};

/// One row turned into the lessons of a single section on a single day.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformed {
  pub section: String,
  pub day: String,
  pub record: DayRecord,
}

/// Reads the configured slots of `row` in order.
///
/// Returns `None` for rows without a section or day. A slot whose room cell
/// is blank inherits the last room seen earlier in the same row.
pub fn transform(row: &Row, schema: &Schema, electives: &Electives) -> Option<Transformed> {
  let section = row.first_text(&schema.section_columns);
  let day_code = row.first_text(&schema.day_columns).to_uppercase();

  if section.is_empty() || day_code.is_empty() {
    debug!("Skipping row without section or day: {:?}", row);
    return None;
  }

  let day = schema.day_name(&day_code);
  if day.is_empty() {
    debug!("Skipping row of {} with day code {:?}", section, day_code);
    return None;
  }

  let mut record = DayRecord::new();
  let mut last_room: Option<String> = None;

  for slot in &schema.slots {
    let subject = row.text(&slot.label);
    if schema.is_blank(&subject) {
      continue;
    }

    let subject = electives.resolve(&subject, &section);
    let room = row.text(&slot.room_column);

    let room = if !schema.is_blank(&room) {
      last_room = Some(room.clone());
      Some(room)
    } else if let Some(room) = schema.sentinel_room(&subject) {
      Some(room.to_string())
    } else {
      last_room.clone()
    };

    record.insert(slot.label.clone(), Entry { subject, room });
  }

  Some(Transformed {
    section,
    day,
    record,
  })
}

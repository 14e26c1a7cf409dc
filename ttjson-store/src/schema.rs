use std::path::Path;

use anyhow::{anyhow, ensure};
use tracing::info;
use ttjson_core::Schema;

use crate::json;

/// Loads a custom schema. Unlike the other inputs it is requested
/// explicitly, so a missing or invalid file is an error.
pub fn load_schema(path: &Path) -> anyhow::Result<Schema> {
  let schema = json::read::<Schema>(path)?
    .ok_or_else(|| anyhow!("Schema file {} does not exist", path.display()))?;

  ensure!(
    !schema.slots.is_empty(),
    "Schema {} in {} does not define any slots",
    schema.name,
    path.display()
  );

  info!(
    "Loaded schema {} with {} slots from {}",
    schema.name,
    schema.slots.len(),
    path.display()
  );

  Ok(schema)
}

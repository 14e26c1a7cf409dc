use std::path::Path;

use tracing::{info, warn};
use ttjson_core::Electives;

use crate::json;

/// Loads the section to elective mapping. Never fails, a missing or
/// malformed file leaves every placeholder unresolved.
pub fn load_electives(path: &Path) -> Electives {
  match json::read::<Electives>(path) {
    Ok(Some(electives)) => {
      info!("Loaded {} elective choices from {}", electives.len(), path.display());
      electives
    }
    Ok(None) => {
      warn!("Elective map {} not found", path.display());
      Electives::default()
    }
    Err(err) => {
      warn!("Ignoring elective map: {:#}", err);
      Electives::default()
    }
  }
}

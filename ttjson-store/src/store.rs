use std::path::Path;

use tracing::{info, warn};
use ttjson_core::Store;

use crate::json;

/// Loads the store written by a previous run.
///
/// Missing and unreadable files both yield `None`, the latter with a warning,
/// so a merge falls back to the freshly parsed sections.
pub fn load_existing(path: &Path) -> Option<Store> {
  match json::read::<Store>(path) {
    Ok(Some(store)) => {
      info!("Found {} existing sections in {}", store.len(), path.display());
      Some(store)
    }
    Ok(None) => {
      info!("No existing store at {}", path.display());
      None
    }
    Err(err) => {
      warn!("Error reading existing store ({:#}), starting fresh", err);
      None
    }
  }
}

pub fn save_store(path: &Path, store: &Store) -> anyhow::Result<()> {
  json::write(path, store)?;
  info!("Saved {} sections to {}", store.len(), path.display());

  Ok(())
}

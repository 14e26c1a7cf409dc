use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Reads and parses a JSON file. A file that does not exist is `Ok(None)`.
pub(crate) fn read<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
  let text = match fs::read_to_string(path) {
    Ok(text) => text,
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
    Err(err) => return Err(err).with_context(|| format!("Unable to read {}", path.display())),
  };

  let value = serde_json::from_str(&text)
    .with_context(|| format!("Unable to parse {} as JSON", path.display()))?;

  Ok(Some(value))
}

/// Serializes with four space indentation and a trailing newline.
pub(crate) fn to_pretty<T: Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
  let mut buf = Vec::new();
  let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
  value.serialize(&mut serializer)?;
  buf.push(b'\n');

  Ok(buf)
}

pub(crate) fn write<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
  let buf = to_pretty(value)?;
  fs::write(path, buf).with_context(|| format!("Unable to write {}", path.display()))?;

  Ok(())
}

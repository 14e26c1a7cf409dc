use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches `PE-3`, `PE-III`, `PE3` and `PEIII` once upper-cased and stripped of spaces.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new("^PE-?(3|III)$").unwrap());

/// Section identifier to the elective that section has chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Electives(HashMap<String, String>);

impl Electives {
  pub fn new(map: HashMap<String, String>) -> Self {
    Self(map)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Tries the section as given, without spaces, without hyphens and
  /// without both. The first key present wins, so `5 A` and `5-A` resolve
  /// to the same entry as `5A` unless the map lists them separately.
  pub fn lookup(&self, section: &str) -> Option<&str> {
    let spaceless = section.replace(' ', "");
    let keys = [
      section.to_string(),
      spaceless.clone(),
      section.replace('-', ""),
      spaceless.replace('-', ""),
    ];

    keys
      .iter()
      .find_map(|key| self.0.get(key))
      .map(String::as_str)
  }

  /// Concrete subject for the given cell. Never fails: anything that can
  /// not be resolved comes back as it was written.
  pub fn resolve(&self, subject: &str, section: &str) -> String {
    let elective = self.lookup(section);

    if is_placeholder(subject) {
      return elective.unwrap_or(subject).to_string();
    }

    // "CC|SPM|NLP|CV": every section in the group takes one of these.
    if subject.contains('|') {
      if let Some(elective) = elective {
        let wanted = elective.to_uppercase();
        if subject
          .split('|')
          .any(|candidate| candidate.trim().to_uppercase() == wanted)
        {
          return elective.to_string();
        }
      }
    }

    subject.to_string()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Electives {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    Self(
      iter
        .into_iter()
        .map(|(section, subject)| (section.into(), subject.into()))
        .collect(),
    )
  }
}

pub fn is_placeholder(subject: &str) -> bool {
  PLACEHOLDER.is_match(&subject.to_uppercase().replace(' ', ""))
}

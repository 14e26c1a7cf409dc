use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Raw value of a single spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
  Text(String),
  Number(f64),
  Empty,
}

impl Cell {
  /// Trimmed textual form of the cell. A `nan` literal in any casing is
  /// treated like a missing value and yields an empty string.
  pub fn text(&self) -> String {
    let text = match self {
      Cell::Text(value) => value.trim().to_string(),
      Cell::Number(value) if !value.is_finite() => String::new(),
      Cell::Number(value) if value.fract() == 0.0 => format!("{}", *value as i64),
      Cell::Number(value) => value.to_string(),
      Cell::Empty => String::new(),
    };

    if text.eq_ignore_ascii_case("nan") {
      return String::new();
    }

    text
  }
}

impl From<&str> for Cell {
  fn from(value: &str) -> Self {
    if value.is_empty() {
      Cell::Empty
    } else {
      Cell::Text(value.to_string())
    }
  }
}

impl From<String> for Cell {
  fn from(value: String) -> Self {
    if value.is_empty() {
      Cell::Empty
    } else {
      Cell::Text(value)
    }
  }
}

impl From<f64> for Cell {
  fn from(value: f64) -> Self {
    Cell::Number(value)
  }
}

/// One line of the input table, addressed by column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
  cells: HashMap<String, Cell>,
}

impl Row {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a cell unless the column is already present. Duplicated headers
  /// therefore resolve to their leftmost column.
  pub fn insert(&mut self, column: impl Into<String>, cell: impl Into<Cell>) {
    if let Entry::Vacant(entry) = self.cells.entry(column.into()) {
      entry.insert(cell.into());
    }
  }

  pub fn get(&self, column: &str) -> Option<&Cell> {
    self.cells.get(column)
  }

  /// Text of the given column, empty if the column is missing.
  pub fn text(&self, column: &str) -> String {
    self.get(column).map(Cell::text).unwrap_or_default()
  }

  /// Text of the first alias that names a column with a non-blank value.
  pub fn first_text<S: AsRef<str>>(&self, aliases: &[S]) -> String {
    aliases
      .iter()
      .map(|alias| self.text(alias.as_ref()))
      .find(|text| !text.is_empty())
      .unwrap_or_default()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.values().all(|cell| cell.text().is_empty())
  }
}

impl<K: Into<String>, V: Into<Cell>> FromIterator<(K, V)> for Row {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut row = Row::new();
    for (column, cell) in iter {
      row.insert(column, cell);
    }
    row
  }
}

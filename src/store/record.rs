//! Row representation for dataset files.
//!
//! Column sets differ per dataset and are not validated against a fixed
//! schema; a row is just its file's header names paired with the row's
//! values, in header order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One row of a dataset file: an ordered column name → value mapping.
///
/// Values are kept as strings; numeric or boolean interpretation is left to
/// whoever consumes the record. Lookups are linear, which is fine for the
/// ten-or-so columns a dataset row carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    columns: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Order of insertion is the order of serialization.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.columns.push((name.into(), value.into()));
    }

    /// Value of the named column, if the row has it.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the named column's value contains `pattern` as a
    /// case-insensitive substring. A missing column never matches.
    pub fn column_contains(&self, name: &str, pattern: &str) -> bool {
        self.value(name)
            .is_some_and(|value| value.to_lowercase().contains(&pattern.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heathrow() -> Record {
        let mut record = Record::new();
        record.push("ICAO", "EGLL");
        record.push("IATA", "LHR");
        record.push("Name", "Heathrow");
        record
    }

    #[test]
    fn test_value_lookup() {
        let record = heathrow();
        assert_eq!(record.value("ICAO"), Some("EGLL"));
        assert_eq!(record.value("Name"), Some("Heathrow"));
        assert_eq!(record.value("Missing"), None);
    }

    #[test]
    fn test_column_contains_is_case_insensitive() {
        let record = heathrow();
        assert!(record.column_contains("Name", "heath"));
        assert!(record.column_contains("ICAO", "egll"));
        assert!(!record.column_contains("Name", "gatwick"));
        assert!(!record.column_contains("Missing", "anything"));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let record = heathrow();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"ICAO":"EGLL","IATA":"LHR","Name":"Heathrow"}"#
        );
    }
}

//! Raw source records.
//!
//! A [`RawRecord`] is one row of a Paperpile CSV export, keyed by column
//! header. Records are read-only once built and are consumed by the entry
//! formatter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Column headers of the Paperpile export that papersync reads.
pub mod columns {
    pub const ITEM_TYPE: &str = "Item type";
    pub const AUTHORS: &str = "Authors";
    pub const TITLE: &str = "Title";
    pub const JOURNAL: &str = "Journal";
    pub const FULL_JOURNAL: &str = "Full journal";
    pub const PROCEEDINGS_TITLE: &str = "Proceedings title";
    pub const ARCHIVE_PREFIX: &str = "Archive prefix";
    pub const BOOK_TITLE: &str = "Book title";
    pub const URLS: &str = "URLs";
    pub const PUBLICATION_YEAR: &str = "Publication year";
    pub const DATE_PUBLISHED: &str = "Date published";
    pub const LABELS: &str = "Labels filed in";
    pub const FOLDERS: &str = "Folders filed in";
}

/// A column the current item type needs is absent from the row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing field '{field}'")]
pub struct MissingField {
    /// Header of the absent column.
    pub field: String,
}

impl MissingField {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// One row of the source export: column header → raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Cell value, if the column is present in this row.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Cell value of a column the caller cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`MissingField`] if the column is absent. An empty cell is
    /// present and is returned as `""`.
    pub fn require(&self, field: &str) -> Result<&str, MissingField> {
        self.get(field).ok_or_else(|| MissingField::new(field))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present_and_empty() {
        let record = RawRecord::new().with(columns::JOURNAL, "");
        assert_eq!(record.require(columns::JOURNAL), Ok(""));
    }

    #[test]
    fn test_require_absent() {
        let record = RawRecord::new();
        let err = record.require(columns::BOOK_TITLE).unwrap_err();
        assert_eq!(err.field, "Book title");
        assert_eq!(err.to_string(), "missing field 'Book title'");
    }

    #[test]
    fn test_from_iter() {
        let record: RawRecord = [("Title", "A"), ("Authors", "B")].into_iter().collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("Title"), Some("A"));
    }
}

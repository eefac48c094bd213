//! Formatted entries.
//!
//! A [`FormattedEntry`] is the canonical, service-ready view of a source
//! record: a fixed set of named columns, each carrying a [`TypedField`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Column type in the remote database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Select,
    MultiSelect,
    Title,
    Date,
    Url,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::MultiSelect => write!(f, "multi_select"),
            Self::Title => write!(f, "title"),
            Self::Date => write!(f, "date"),
            Self::Url => write!(f, "url"),
        }
    }
}

/// Value of a typed field: a scalar string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as empty for the filtered entry.
    ///
    /// Empty means `""`, `[]`, or a list holding exactly one `""`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => {
                items.is_empty() || (items.len() == 1 && items[0].is_empty())
            }
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::List(items) => write!(f, "{items:?}"),
        }
    }
}

/// A `{type, value}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedField {
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub value: FieldValue,
}

impl TypedField {
    pub fn select(value: impl Into<String>) -> Self {
        Self {
            kind: FieldType::Select,
            value: FieldValue::Text(value.into()),
        }
    }

    #[must_use]
    pub fn multi_select(values: Vec<String>) -> Self {
        Self {
            kind: FieldType::MultiSelect,
            value: FieldValue::List(values),
        }
    }

    pub fn title(value: impl Into<String>) -> Self {
        Self {
            kind: FieldType::Title,
            value: FieldValue::Text(value.into()),
        }
    }

    pub fn date(value: impl Into<String>) -> Self {
        Self {
            kind: FieldType::Date,
            value: FieldValue::Text(value.into()),
        }
    }

    pub fn url(value: impl Into<String>) -> Self {
        Self {
            kind: FieldType::Url,
            value: FieldValue::Text(value.into()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// The nine canonical columns, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    ItemType,
    Authors,
    Title,
    Venues,
    Date,
    Link,
    Labels,
    Folders,
    Status,
}

impl EntryField {
    pub const ALL: [Self; 9] = [
        Self::ItemType,
        Self::Authors,
        Self::Title,
        Self::Venues,
        Self::Date,
        Self::Link,
        Self::Labels,
        Self::Folders,
        Self::Status,
    ];

    /// Column name in the remote database.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ItemType => "Item type",
            Self::Authors => "Authors",
            Self::Title => "Title",
            Self::Venues => "Venues",
            Self::Date => "Date",
            Self::Link => "Link",
            Self::Labels => "Labels",
            Self::Folders => "Folders",
            Self::Status => "Status",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for EntryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical field set of one record, kept in [`EntryField::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedEntry {
    fields: Vec<(EntryField, TypedField)>,
}

impl FormattedEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value and keeping canonical order.
    pub fn set(&mut self, field: EntryField, value: TypedField) {
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => {
                self.fields.push((field, value));
                self.fields.sort_by_key(|(f, _)| {
                    EntryField::ALL.iter().position(|x| x == f).unwrap_or(usize::MAX)
                });
            }
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: EntryField, value: TypedField) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn field(&self, field: EntryField) -> Option<&TypedField> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }

    /// Look up a field by remote column name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypedField> {
        EntryField::from_name(name).and_then(|f| self.field(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryField, &TypedField)> {
        self.fields.iter().map(|(f, v)| (*f, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of this entry without the fields whose value is empty.
    #[must_use]
    pub fn filtered(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .cloned()
                .collect(),
        }
    }
}

impl Serialize for FormattedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_emptiness() {
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(FieldValue::List(vec![String::new()]).is_empty());
        assert!(!FieldValue::List(vec![String::new(), String::new()]).is_empty());
        assert!(!FieldValue::Text("x".into()).is_empty());
    }

    #[test]
    fn test_set_keeps_canonical_order() {
        let entry = FormattedEntry::new()
            .with(EntryField::Status, TypedField::select("to-be-read"))
            .with(EntryField::Title, TypedField::title("A"))
            .with(EntryField::ItemType, TypedField::select("Book"));

        let order: Vec<_> = entry.iter().map(|(f, _)| f).collect();
        assert_eq!(
            order,
            vec![EntryField::ItemType, EntryField::Title, EntryField::Status]
        );
    }

    #[test]
    fn test_set_replaces() {
        let entry = FormattedEntry::new()
            .with(EntryField::Title, TypedField::title("A"))
            .with(EntryField::Title, TypedField::title("B"));
        assert_eq!(entry.len(), 1);
        assert_eq!(
            entry.get("Title").unwrap().value,
            FieldValue::Text("B".into())
        );
    }

    #[test]
    fn test_filtered_drops_empty_values() {
        let entry = FormattedEntry::new()
            .with(EntryField::Title, TypedField::title("A"))
            .with(EntryField::Link, TypedField::url(""))
            .with(EntryField::Labels, TypedField::multi_select(vec![]))
            .with(EntryField::Authors, TypedField::multi_select(vec![String::new()]));

        let filtered = entry.filtered();
        assert_eq!(filtered.len(), 1);
        assert!(filtered.get("Title").is_some());
        // The source entry is untouched.
        assert_eq!(entry.len(), 4);
    }

    #[test]
    fn test_serialize_shape() {
        let entry = FormattedEntry::new()
            .with(EntryField::Title, TypedField::title("A"))
            .with(EntryField::Labels, TypedField::multi_select(vec!["x".into()]));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Title": {"type": "title", "value": "A"},
                "Labels": {"type": "multi_select", "value": ["x"]},
            })
        );
    }

    #[test]
    fn test_entry_field_names_round_trip() {
        for field in EntryField::ALL {
            assert_eq!(EntryField::from_name(field.name()), Some(field));
        }
        assert_eq!(EntryField::from_name("Institutions"), None);
    }
}

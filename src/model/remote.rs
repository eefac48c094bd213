//! Remote pages, as fetched from the database snapshot.

use serde::{Deserialize, Serialize};

/// A property value with the API wrapping removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteValue {
    Text(String),
    List(Vec<String>),
    /// No value set (e.g. an unset select or url)
    Empty,
}

impl RemoteValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for RemoteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::List(items) => write!(f, "{items:?}"),
            Self::Empty => write!(f, "<empty>"),
        }
    }
}

/// One page of the remote database: its id plus unwrapped properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRecord {
    /// Opaque page identifier
    pub id: String,

    /// Properties by column name, in the order the API returned them
    pub fields: Vec<(String, RemoteValue)>,
}

impl RemoteRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: RemoteValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: RemoteValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RemoteValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Page title, when the Title column holds text.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("Title").and_then(RemoteValue::as_text)
    }
}

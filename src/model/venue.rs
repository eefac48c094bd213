//! Venue alias tables.

use serde::{Deserialize, Serialize};

/// A known publication venue: short label plus full name.
///
/// Loaded from the `journals` and `conferences` lists of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueAlias {
    /// Label written to the Venues column (e.g. "NeurIPS")
    pub short: String,

    /// Full name as it appears in the export
    pub name: String,
}

impl VenueAlias {
    pub fn new(short: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            name: name.into(),
        }
    }
}

/// The two alias tables consulted by the venue resolver, in config order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueTables {
    #[serde(default)]
    pub journals: Vec<VenueAlias>,

    #[serde(default)]
    pub conferences: Vec<VenueAlias>,
}

impl VenueTables {
    #[must_use]
    pub fn new(journals: Vec<VenueAlias>, conferences: Vec<VenueAlias>) -> Self {
        Self {
            journals,
            conferences,
        }
    }
}

//! Data models for papersync.

mod entry;
mod record;
mod remote;
mod venue;

pub use entry::{EntryField, FieldType, FieldValue, FormattedEntry, TypedField};
pub use record::{columns, MissingField, RawRecord};
pub use remote::{RemoteRecord, RemoteValue};
pub use venue::{VenueAlias, VenueTables};

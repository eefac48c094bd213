//! Remote page store trait.
//!
//! The batch runner only needs three operations from the remote database:
//! a one-off snapshot, page creation and page update. Implemented by the
//! Notion client and by in-memory stores in tests.

use crate::error::Result;
use crate::model::{FormattedEntry, RemoteRecord};

/// Trait for remote page stores.
pub trait PageStore: Send + Sync {
    /// Fetch every page currently in the database.
    fn query_database(&self) -> impl std::future::Future<Output = Result<Vec<RemoteRecord>>> + Send;

    /// Insert a new page with the given (non-empty) fields.
    fn create_page(
        &self,
        entry: &FormattedEntry,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Overwrite the given fields of an existing page. Fields not in `entry`
    /// are left as they are.
    fn update_page(
        &self,
        id: &str,
        entry: &FormattedEntry,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

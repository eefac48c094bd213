//! Notion database backend.
//!
//! [`NotionClient`] implements [`PageStore`](crate::sync::PageStore) over the
//! public REST API. Property wrapping lives in [`properties`].

mod client;
pub mod properties;

pub use client::{NotionClient, DEFAULT_BASE_URL, NOTION_VERSION};
pub use properties::{decode_page, encode_properties, page_from_entry};

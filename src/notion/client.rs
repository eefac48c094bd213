//! Notion REST client.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{FormattedEntry, RemoteRecord};
use crate::sync::PageStore;

use super::properties::{decode_page, encode_properties};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Largest page size the query endpoint accepts.
const PAGE_SIZE: u32 = 100;

/// Client bound to one database.
pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    database: String,
}

/// One page of `databases/{id}/query` results.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<Value>,
    #[serde(default)]
    has_more: bool,
    next_cursor: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    message: String,
}

impl NotionClient {
    /// Create a client for `database` using the integration `token`.
    pub fn new(token: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            database: database.into(),
        }
    }

    /// Point the client at another endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder, body: &Value) -> Result<Value> {
        let response = request
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(remote_error(status.as_u16(), &text));
        }

        Ok(response.json().await?)
    }
}

/// Build a [`Error::Remote`] from a failed response body.
fn remote_error(status: u16, body: &str) -> Error {
    let message = match serde_json::from_str::<ApiError>(body) {
        Ok(err) if err.code.is_empty() => err.message,
        Ok(err) => format!("{}: {}", err.code, err.message),
        Err(_) if body.trim().is_empty() => "empty response".to_string(),
        Err(_) => body.trim().to_string(),
    };
    Error::Remote { status, message }
}

impl PageStore for NotionClient {
    async fn query_database(&self) -> Result<Vec<RemoteRecord>> {
        let url = self.url(&format!("databases/{}/query", self.database));
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({ "page_size": PAGE_SIZE });
            if let Some(c) = &cursor {
                body["start_cursor"] = json!(c);
            }

            let value = self.send(self.client.post(&url), &body).await?;
            let batch: QueryResponse = serde_json::from_value(value)?;
            trace!(count = batch.results.len(), has_more = batch.has_more, "Fetched query page");
            pages.extend(batch.results.iter().filter_map(decode_page));

            match batch.next_cursor {
                Some(next) if batch.has_more => cursor = Some(next),
                _ => break,
            }
        }

        debug!(database = %self.database, pages = pages.len(), "Queried database");
        Ok(pages)
    }

    async fn create_page(&self, entry: &FormattedEntry) -> Result<()> {
        let body = json!({
            "parent": { "database_id": self.database },
            "properties": encode_properties(entry),
        });
        self.send(self.client.post(self.url("pages")), &body).await?;
        Ok(())
    }

    async fn update_page(&self, id: &str, entry: &FormattedEntry) -> Result<()> {
        let body = json!({ "properties": encode_properties(entry) });
        self.send(self.client.patch(self.url(&format!("pages/{id}"))), &body)
            .await?;
        Ok(())
    }
}

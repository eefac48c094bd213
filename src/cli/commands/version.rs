//! Version command implementation.

use serde::Serialize;

use crate::error::Result;
use crate::notion::NOTION_VERSION;

#[derive(Serialize)]
struct VersionOutput {
    version: &'static str,
    build: &'static str,
    notion_api: &'static str,
}

impl VersionOutput {
    fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build: if cfg!(debug_assertions) { "dev" } else { "release" },
            notion_api: NOTION_VERSION,
        }
    }
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let output = VersionOutput::current();
    if json {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "papersync version {} ({}, Notion API {})",
            output.version, output.build, output.notion_api
        );
    }
    Ok(())
}

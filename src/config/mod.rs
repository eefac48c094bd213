//! Configuration management.
//!
//! The config file is YAML. It carries the venue alias tables and,
//! optionally, the Notion connection settings:
//!
//! ```yaml
//! journals:
//!   - short: JMLR
//!     name: Journal of Machine Learning Research
//! conferences:
//!   - short: NeurIPS
//!     name: Neural Information Processing Systems
//! notion:
//!   database: 0123456789abcdef
//!   token: secret_xxx
//! max_distance: 1
//! ```
//!
//! Command-line flags (and their `NOTION_*` environment variables) always
//! win over values from the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{VenueAlias, VenueTables};
use crate::sync::DEFAULT_MAX_DISTANCE;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PAPERSYNC_CONFIG";

/// File name inside the per-user config directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Parsed config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Journal aliases, in lookup order
    pub journals: Vec<VenueAlias>,
    /// Conference aliases, in lookup order
    pub conferences: Vec<VenueAlias>,
    pub notion: NotionSettings,
    /// Title match threshold
    pub max_distance: Option<usize>,
}

/// The `notion:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotionSettings {
    pub database: Option<String>,
    pub token: Option<String>,
    /// Alternative API endpoint (proxies, test servers)
    pub base_url: Option<String>,
}

impl Config {
    /// Clone the alias tables out of the config.
    #[must_use]
    pub fn venue_tables(&self) -> VenueTables {
        VenueTables::new(self.journals.clone(), self.conferences.clone())
    }

    /// Integration token: explicit value first, then the config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if neither is set.
    pub fn token(&self, explicit: Option<&str>) -> Result<String> {
        pick(explicit, self.notion.token.as_deref()).ok_or(Error::MissingCredentials {
            what: "Notion token",
            flag: "token",
        })
    }

    /// Database id: explicit value first, then the config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if neither is set.
    pub fn database(&self, explicit: Option<&str>) -> Result<String> {
        pick(explicit, self.notion.database.as_deref()).ok_or(Error::MissingCredentials {
            what: "Notion database id",
            flag: "database",
        })
    }

    /// Match threshold: explicit value, then the config file, then the default.
    #[must_use]
    pub fn max_distance(&self, explicit: Option<usize>) -> usize {
        explicit
            .or(self.max_distance)
            .unwrap_or(DEFAULT_MAX_DISTANCE)
    }
}

/// First non-blank value.
fn pick(explicit: Option<&str>, configured: Option<&str>) -> Option<String> {
    explicit
        .into_iter()
        .chain(configured)
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Default config location: `<user config dir>/papersync/config.yaml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "papersync")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Resolve the config file path.
///
/// Priority:
/// 1. If `explicit_path` is provided, use it directly
/// 2. `PAPERSYNC_CONFIG` environment variable
/// 3. Per-user location from [`default_config_path`]
///
/// # Errors
///
/// Returns [`Error::NoConfigPath`] if no location can be determined.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    default_config_path().ok_or(Error::NoConfigPath)
}

/// Load and parse the config file at `path`.
///
/// # Errors
///
/// Returns [`Error::ConfigNotFound`] if the file does not exist, or
/// [`Error::Config`] if it is not valid.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    let config = parse_config(&text)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    debug!(
        path = %path.display(),
        journals = config.journals.len(),
        conferences = config.conferences.len(),
        "Loaded config"
    );
    Ok(config)
}

/// Parse config YAML.
///
/// An empty document yields the default (empty) config.
///
/// # Errors
///
/// Returns the YAML error if the text does not describe a config.
pub fn parse_config(text: &str) -> std::result::Result<Config, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONFIG: &str = "\
journals:
  - short: JMLR
    name: Journal of Machine Learning Research
  - short: TMLR
    name: Transactions on Machine Learning Research
conferences:
  - short: NeurIPS
    name: Neural Information Processing Systems
notion:
  database: db-123
max_distance: 3
";

    #[test]
    fn test_parse_config() {
        let config = parse_config(CONFIG).unwrap();
        assert_eq!(config.journals.len(), 2);
        assert_eq!(config.journals[1].short, "TMLR");
        assert_eq!(
            config.conferences[0],
            VenueAlias::new("NeurIPS", "Neural Information Processing Systems")
        );
        assert_eq!(config.notion.database.as_deref(), Some("db-123"));
        assert!(config.notion.token.is_none());
        assert_eq!(config.max_distance, Some(3));

        let tables = config.venue_tables();
        assert_eq!(tables.journals.len(), 2);
        assert_eq!(tables.conferences.len(), 1);
    }

    #[test]
    fn test_parse_alias_tables_only() {
        let config = parse_config("journals: []\nconferences: []\n").unwrap();
        assert_eq!(config, Config::default());
        assert!(parse_config("").unwrap().journals.is_empty());
    }

    #[test]
    fn test_parse_config_rejects_bad_alias() {
        assert!(parse_config("journals:\n  - short: X\n").is_err());
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = parse_config(CONFIG).unwrap();
        assert_eq!(config.database(None).unwrap(), "db-123");
        assert_eq!(config.database(Some("other")).unwrap(), "other");
        assert_eq!(config.database(Some("  ")).unwrap(), "db-123");
        assert_eq!(config.max_distance(None), 3);
        assert_eq!(config.max_distance(Some(2)), 2);
        assert_eq!(Config::default().max_distance(None), DEFAULT_MAX_DISTANCE);
    }

    #[test]
    fn test_missing_token() {
        let err = Config::default().token(None).unwrap_err();
        assert!(matches!(err, Error::MissingCredentials { flag: "token", .. }));
    }

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.journals[0].short, "JMLR");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/papersync.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"journals: {not: [a list").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_resolve_config_path_with_explicit() {
        let explicit = PathBuf::from("/custom/papersync.yaml");
        assert_eq!(resolve_config_path(Some(&explicit)).unwrap(), explicit);
    }
}

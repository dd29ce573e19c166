//! Where the registry database lives and how connections to it are opened.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use std::{path::PathBuf, str::FromStr, time::Duration};

/// Storage settings of the registry.
///
/// Without a `database_path` the registry is kept in memory and is lost when
/// the last connection closes, which is what the test suites rely on.
///
/// # Examples
///
/// ```
/// use sms_sqlite::config::SqliteConfig;
///
/// // A throwaway registry
/// let scratch = SqliteConfig::default();
/// assert!(scratch.database_path.is_none());
///
/// // The registry of a field campaign, which must already exist
/// let campaign: SqliteConfig = serde_json::from_value(serde_json::json!({
///     "database_path": "/srv/campaigns/north-sea.db",
///     "create_if_missing": false,
/// }))
/// .unwrap();
/// assert!(!campaign.create_if_missing);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SqliteConfig {
    /// Registry database file, `None` for an in-memory registry
    pub database_path: Option<PathBuf>,

    /// Create an empty registry when the file does not exist yet
    pub create_if_missing: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: true,
        }
    }
}

impl SqliteConfig {
    /// Connection options shared by the reader and writer pools.
    pub(crate) fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        let options = match &self.database_path {
            Some(path) => SqliteConnectOptions::new().filename(path),
            // every pool connection must see the same in-memory database
            None => SqliteConnectOptions::from_str("sqlite::memory:")?.shared_cache(true),
        };

        Ok(options
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("journal_size_limit", "27103364")
            .pragma("mmap_size", "134217728")
            .pragma("temp_store", "memory")
            .create_if_missing(self.create_if_missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SqliteConfig =
            serde_json::from_str(r#"{"database_path": "registry.db"}"#).unwrap();

        assert_eq!(config.database_path, Some(PathBuf::from("registry.db")));
        assert!(config.create_if_missing);
    }

    #[test]
    fn test_file_options_point_at_database() {
        let config = SqliteConfig {
            database_path: Some(PathBuf::from("registry.db")),
            create_if_missing: false,
        };

        let options = config.connect_options().unwrap();

        assert_eq!(options.get_filename(), std::path::Path::new("registry.db"));
    }
}

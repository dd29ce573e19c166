//! Settings of the `smsctl` tool.

use serde::{Deserialize, Serialize};
use sms_sqlite::config::SqliteConfig;
use std::path::Path;

/// Everything `smsctl` can be configured with.
///
/// Values are taken from, in increasing precedence, the built-in defaults, an
/// optional TOML file and `APP_`-prefixed environment variables, where `__`
/// descends into a section:
///
/// ```toml
/// # smsctl.toml
/// [database]
/// database_path = "/srv/campaigns/north-sea.db"
/// create_if_missing = false
/// ```
///
/// is equivalent to
///
/// ```bash
/// export APP_DATABASE__DATABASE_PATH="/srv/campaigns/north-sea.db"
/// export APP_DATABASE__CREATE_IF_MISSING=false
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// The registry database
    #[serde(default)]
    pub database: SqliteConfig,
}

impl AppConfig {
    /// Assemble the settings, reading `file` if one was named.
    ///
    /// A named file that does not exist is an error rather than silently
    /// falling back to an in-memory registry.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = file {
            anyhow::ensure!(path.exists(), "Config file {} does not exist", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_overrides_defaults() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("smsctl-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[database]\ndatabase_path = \"north-sea.db\"\ncreate_if_missing = false\n",
        )?;

        let loaded = AppConfig::load(Some(&path));
        std::fs::remove_file(&path)?;
        let config = loaded?;

        assert_eq!(
            config.database.database_path.as_deref(),
            Some(Path::new("north-sea.db"))
        );
        assert!(!config.database.create_if_missing);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/smsctl.toml");

        assert!(AppConfig::load(Some(path)).is_err());
    }
}

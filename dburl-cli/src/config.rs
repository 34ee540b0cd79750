//! CLI configuration handling.

use serde::{Deserialize, Serialize};
use std::path::Path;

use dburl_core::{DEFAULT_ENV, ParseOptions};

use crate::error::CliResult;

/// Default config file name (looked up in the working directory)
pub const CONFIG_FILE_NAME: &str = "dburl.toml";

/// dburl CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Descriptor source
    pub source: SourceConfig,

    /// Parser options
    pub parse: ParseOptions,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the explicit config file, or `dburl.toml` from `cwd` when it
    /// exists, or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = cwd.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Descriptor source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Environment variable holding the descriptor
    pub env: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            env: DEFAULT_ENV.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dburl_core::PortPolicy;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.source.env, "DATABASE_URL");
        assert_eq!(config.parse.port_policy, PortPolicy::Strict);
    }

    #[test]
    fn test_config_full() {
        let config = Config::from_toml(
            r#"
            [source]
            env = "APP_DB"

            [parse]
            port_policy = "lenient"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.env, "APP_DB");
        assert_eq!(config.parse.port_policy, PortPolicy::Lenient);
    }

    #[test]
    fn test_config_invalid_policy() {
        let result = Config::from_toml("[parse]\nport_policy = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_from_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[source]\nenv = \"X_URL\"\n").unwrap();

        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config.source.env, "X_URL");
    }

    #[test]
    fn test_resolve_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }
}

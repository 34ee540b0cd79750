//! Environment variable sources.
//!
//! The parser never reads the process environment itself. Lookups go
//! through an [`EnvSource`], so tests and embedders can supply their own
//! variables without mutating process state.

use std::collections::HashMap;

use crate::config::DbConfig;
use crate::error::DbUrlResult;
use crate::parser::Parser;

/// Default environment variable holding the descriptor.
pub const DEFAULT_ENV: &str = "DATABASE_URL";

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Parse the descriptor stored in a process environment variable.
///
/// Fails with [`DbUrlError::NotFound`](crate::DbUrlError::NotFound) when the
/// variable is unset.
pub fn load_from_env(var: &str) -> DbUrlResult<DbConfig> {
    load_from_source(&StdEnvSource, var)
}

/// Parse the descriptor stored in `var` of the given source.
///
/// ```rust
/// use dburl_core::{load_from_source, Dialect, MapEnvSource};
///
/// let env = MapEnvSource::new().set("DB_URL", "sqlite://:memory:");
/// let config = load_from_source(&env, "DB_URL").unwrap();
/// assert_eq!(config.dialect, Some(Dialect::Sqlite));
/// ```
pub fn load_from_source<S: EnvSource + ?Sized>(source: &S, var: &str) -> DbUrlResult<DbConfig> {
    Parser::default().load_from_source(source, var)
}

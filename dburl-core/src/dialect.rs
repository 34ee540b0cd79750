//! Database dialect tags.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{DbUrlError, DbUrlResult};

/// Database engine family a descriptor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// SQLite (file path or in-memory)
    #[serde(alias = "sqlite3")]
    Sqlite,
    /// Microsoft SQL Server
    Mssql,
    /// PostgreSQL
    Postgres,
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Dialect; 3] = [Self::Sqlite, Self::Mssql, Self::Postgres];

    /// Canonical scheme token.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mssql => "mssql",
            Self::Postgres => "postgres",
        }
    }

    /// Every scheme token accepted for this dialect.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Sqlite => &["sqlite", "sqlite3"],
            Self::Mssql => &["mssql"],
            Self::Postgres => &["postgres"],
        }
    }

    /// Whether descriptors for this dialect carry host and credentials.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Mssql | Self::Postgres)
    }

    /// Get the default port for this dialect.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::Sqlite => None,
            Self::Mssql => Some(1433),
            Self::Postgres => Some(5432),
        }
    }

    /// Parse a dialect from a descriptor scheme.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// ```rust
    /// use dburl_core::Dialect;
    ///
    /// assert_eq!(Dialect::from_scheme("sqlite3").unwrap(), Dialect::Sqlite);
    /// assert!(Dialect::from_scheme("Postgres").is_err());
    /// ```
    pub fn from_scheme(scheme: &str) -> DbUrlResult<Self> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.aliases().iter().any(|alias| *alias == scheme))
            .ok_or_else(|| DbUrlError::EngineNotSupported(scheme.to_string()))
    }
}

impl FromStr for Dialect {
    type Err = DbUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_scheme(s)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

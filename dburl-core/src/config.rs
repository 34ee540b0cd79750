//! Database connection configuration.

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{DbUrlError, DbUrlResult};
use crate::env::{self, DEFAULT_ENV};
use crate::parser;
use crate::render;

/// In-memory SQLite sentinel path.
pub const MEMORY_PATH: &str = ":memory:";

/// Flat database connection configuration.
///
/// Which fields are populated depends on [`dialect`](Self::dialect): SQLite
/// only carries [`path`](Self::path), network dialects carry host,
/// credentials, port and database name. The [`Default`] value has no dialect
/// and renders to an empty string.
///
/// Deserialization goes through [`DbConfig::validate`], so a serialized
/// configuration cannot smuggle in fields that do not belong to its dialect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DbConfigFields")]
pub struct DbConfig {
    /// Database dialect.
    pub dialect: Option<Dialect>,
    /// File path or `:memory:` (SQLite only).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Server host.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Server port.
    #[serde(skip_serializing_if = "is_zero")]
    pub port: u16,
    /// Username.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user: String,
    /// Password.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Database name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dbname: String,
}

fn is_zero(port: &u16) -> bool {
    *port == 0
}

/// Unchecked wire form of [`DbConfig`].
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct DbConfigFields {
    dialect: Option<Dialect>,
    path: String,
    host: String,
    port: u16,
    user: String,
    password: String,
    dbname: String,
}

impl TryFrom<DbConfigFields> for DbConfig {
    type Error = DbUrlError;

    fn try_from(fields: DbConfigFields) -> Result<Self, Self::Error> {
        let config = DbConfig {
            dialect: fields.dialect,
            path: fields.path,
            host: fields.host,
            port: fields.port,
            user: fields.user,
            password: fields.password,
            dbname: fields.dbname,
        };
        config.validate()?;
        Ok(config)
    }
}

impl DbConfig {
    /// Create a new SQLite configuration builder.
    pub fn sqlite() -> DbConfigBuilder {
        DbConfigBuilder::new(Dialect::Sqlite)
    }

    /// Create a new SQL Server configuration builder.
    pub fn mssql() -> DbConfigBuilder {
        DbConfigBuilder::new(Dialect::Mssql)
    }

    /// Create a new PostgreSQL configuration builder.
    pub fn postgres() -> DbConfigBuilder {
        DbConfigBuilder::new(Dialect::Postgres)
    }

    /// Parse a descriptor with the default (strict) options.
    pub fn parse(url: &str) -> DbUrlResult<Self> {
        parser::parse(url)
    }

    /// Load and parse the descriptor stored in an environment variable.
    pub fn from_env(var: &str) -> DbUrlResult<Self> {
        env::load_from_env(var)
    }

    /// Load and parse the descriptor stored in `DATABASE_URL`.
    pub fn from_database_url() -> DbUrlResult<Self> {
        Self::from_env(DEFAULT_ENV)
    }

    /// Render the driver connection string for this configuration.
    pub fn connection_string(&self) -> String {
        render::render(self)
    }

    /// Check if this is an in-memory SQLite database.
    pub fn is_memory(&self) -> bool {
        self.dialect == Some(Dialect::Sqlite) && self.path == MEMORY_PATH
    }

    /// Check if this configuration targets a network database.
    pub fn is_network(&self) -> bool {
        self.dialect.is_some_and(|d| d.is_network())
    }

    /// Check that exactly the fields of the dialect are populated.
    ///
    /// A network port of 0 is accepted, since lenient parsing produces it.
    pub fn validate(&self) -> DbUrlResult<()> {
        let network_fields = [
            ("host", &self.host),
            ("user", &self.user),
            ("password", &self.password),
            ("dbname", &self.dbname),
        ];

        match self.dialect {
            Some(dialect) if dialect.is_network() => {
                if !self.path.is_empty() {
                    return Err(unexpected(dialect, "path"));
                }
                if let Some((name, _)) = network_fields.iter().find(|(_, v)| v.is_empty()) {
                    return Err(DbUrlError::cannot_be_parsed(format!(
                        "missing required field '{}'",
                        name
                    )));
                }
            }
            Some(dialect) => {
                if self.path.is_empty() {
                    return Err(DbUrlError::cannot_be_parsed("missing required field 'path'"));
                }
                if self.port != 0 {
                    return Err(unexpected(dialect, "port"));
                }
                if let Some((name, _)) = network_fields.iter().find(|(_, v)| !v.is_empty()) {
                    return Err(unexpected(dialect, name));
                }
            }
            None => {
                if *self != DbConfig::default() {
                    return Err(DbUrlError::cannot_be_parsed("fields set without a dialect"));
                }
            }
        }

        Ok(())
    }

    /// Rebuild the descriptor string.
    ///
    /// Values are written as-is; nothing is escaped. The default
    /// configuration produces an empty string.
    pub fn to_url(&self) -> String {
        match self.dialect {
            Some(Dialect::Sqlite) => format!("{}://{}", Dialect::Sqlite, self.path),
            Some(dialect) => format!(
                "{}://{}:{}@{}:{}/{}",
                dialect, self.user, self.password, self.host, self.port, self.dbname
            ),
            None => String::new(),
        }
    }
}

impl std::str::FromStr for DbConfig {
    type Err = DbUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Builder for [`DbConfig`].
///
/// ```rust
/// use dburl_core::DbConfig;
///
/// let config = DbConfig::postgres()
///     .host("db")
///     .user("app")
///     .password("secret")
///     .dbname("app")
///     .build()
///     .unwrap();
/// assert_eq!(config.port, 5432);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfigBuilder {
    dialect: Dialect,
    path: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    password: Option<String>,
    dbname: Option<String>,
}

impl DbConfigBuilder {
    /// Create a new builder for the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            path: None,
            host: None,
            port: None,
            user: None,
            password: None,
            dbname: None,
        }
    }

    /// Set the SQLite path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Use an in-memory SQLite database.
    pub fn memory(self) -> Self {
        self.path(MEMORY_PATH)
    }

    /// Set the host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the username.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the database name.
    pub fn dbname(mut self, dbname: impl Into<String>) -> Self {
        self.dbname = Some(dbname.into());
        self
    }

    /// Build the configuration.
    ///
    /// Fields that do not belong to the dialect are dropped.
    pub fn build(self) -> DbUrlResult<DbConfig> {
        if !self.dialect.is_network() {
            let path = required("path", self.path)?;
            return Ok(DbConfig {
                dialect: Some(self.dialect),
                path,
                ..DbConfig::default()
            });
        }

        let port = self
            .port
            .or_else(|| self.dialect.default_port())
            .unwrap_or_default();

        Ok(DbConfig {
            dialect: Some(self.dialect),
            path: String::new(),
            host: required("host", self.host)?,
            port,
            user: required("user", self.user)?,
            password: required("password", self.password)?,
            dbname: required("dbname", self.dbname)?,
        })
    }
}

fn unexpected(dialect: Dialect, field: &str) -> DbUrlError {
    DbUrlError::cannot_be_parsed(format!("field '{}' does not apply to {}", field, dialect))
}

fn required(field: &str, value: Option<String>) -> DbUrlResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DbUrlError::cannot_be_parsed(format!(
            "missing required field '{}'",
            field
        ))),
    }
}

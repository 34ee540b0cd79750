//! Descriptor parser.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DbConfig, MEMORY_PATH};
use crate::dialect::Dialect;
use crate::env::EnvSource;
use crate::error::{DbUrlError, DbUrlResult};

/// Separator between the dialect scheme and the body.
pub const SCHEME_SEPARATOR: &str = "://";

/// Characters that split the body of a network descriptor.
const FIELD_DELIMITERS: [char; 3] = [':', '@', '/'];

/// Number of fields in a network descriptor body.
const NETWORK_FIELD_COUNT: usize = 5;

/// How a port field that is not a valid `u16` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortPolicy {
    /// Reject the descriptor with [`DbUrlError::CannotBeParsed`].
    #[default]
    Strict,
    /// Fall back to port 0.
    Lenient,
}

/// Options controlling descriptor parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Port handling.
    pub port_policy: PortPolicy,
}

impl ParseOptions {
    /// Strict options (the default).
    pub fn strict() -> Self {
        Self::default()
    }

    /// Options that turn an unparsable port into 0.
    pub fn lenient() -> Self {
        Self {
            port_policy: PortPolicy::Lenient,
        }
    }
}

/// Descriptor parser.
///
/// # Examples
///
/// ```rust
/// use dburl_core::{Dialect, ParseOptions, Parser};
///
/// let config = Parser::default().parse("postgres://u:p@db:5432/app").unwrap();
/// assert_eq!(config.dialect, Some(Dialect::Postgres));
/// assert_eq!(config.port, 5432);
///
/// let config = Parser::new(ParseOptions::lenient())
///     .parse("postgres://u:p@db:pg/app")
///     .unwrap();
/// assert_eq!(config.port, 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse a descriptor into a fresh configuration.
    pub fn parse(&self, url: &str) -> DbUrlResult<DbConfig> {
        let config = self.parse_inner(url)?;
        debug!(
            dialect = ?config.dialect,
            host = %config.host,
            "Descriptor parsed"
        );
        Ok(config)
    }

    /// Look up `var` in `source` and parse its value.
    pub fn load_from_source<S: EnvSource + ?Sized>(
        &self,
        source: &S,
        var: &str,
    ) -> DbUrlResult<DbConfig> {
        let url = source
            .get(var)
            .ok_or_else(|| DbUrlError::NotFound(var.to_string()))?;
        debug!(var = %var, url_len = url.len(), "Loaded descriptor from environment");
        self.parse(&url)
    }

    fn parse_inner(&self, url: &str) -> DbUrlResult<DbConfig> {
        if is_memory_descriptor(url) {
            return Ok(DbConfig {
                dialect: Some(Dialect::Sqlite),
                path: MEMORY_PATH.to_string(),
                ..DbConfig::default()
            });
        }

        let (scheme, body) = url.split_once(SCHEME_SEPARATOR).ok_or_else(|| {
            DbUrlError::invalid_syntax("missing '://' separator after the dialect")
        })?;
        if scheme.is_empty() {
            return Err(DbUrlError::invalid_syntax("missing dialect before '://'"));
        }

        let dialect = Dialect::from_scheme(scheme)?;
        if dialect.is_network() {
            self.parse_network(dialect, body)
        } else {
            parse_sqlite(body)
        }
    }

    fn parse_network(&self, dialect: Dialect, body: &str) -> DbUrlResult<DbConfig> {
        let fields = split_fields(body);
        let [user, password, host, port, dbname] = fields[..] else {
            return Err(DbUrlError::cannot_be_parsed(format!(
                "expected {} fields (user:password@host:port/dbname), found {}",
                NETWORK_FIELD_COUNT,
                fields.len()
            )));
        };

        Ok(DbConfig {
            dialect: Some(dialect),
            path: String::new(),
            host: host.to_string(),
            port: self.parse_port(port)?,
            user: user.to_string(),
            password: password.to_string(),
            dbname: dbname.to_string(),
        })
    }

    fn parse_port(&self, port: &str) -> DbUrlResult<u16> {
        match (port.parse::<u16>(), self.options.port_policy) {
            (Ok(port), _) => Ok(port),
            (Err(_), PortPolicy::Lenient) => Ok(0),
            (Err(_), PortPolicy::Strict) => Err(DbUrlError::cannot_be_parsed(format!(
                "invalid port number '{}'",
                port
            ))),
        }
    }
}

fn parse_sqlite(body: &str) -> DbUrlResult<DbConfig> {
    if body.is_empty() {
        return Err(DbUrlError::cannot_be_parsed("missing sqlite path"));
    }

    Ok(DbConfig {
        dialect: Some(Dialect::Sqlite),
        path: body.to_string(),
        ..DbConfig::default()
    })
}

/// `sqlite://:memory:` under any SQLite alias.
fn is_memory_descriptor(url: &str) -> bool {
    Dialect::Sqlite.aliases().iter().any(|alias| {
        url.strip_prefix(*alias)
            .and_then(|rest| rest.strip_prefix(SCHEME_SEPARATOR))
            == Some(MEMORY_PATH)
    })
}

/// Split on the delimiter class, dropping empty fields.
fn split_fields(body: &str) -> Vec<&str> {
    body.split(FIELD_DELIMITERS)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parse a descriptor with strict options.
///
/// ```rust
/// use dburl_core::parse;
///
/// let config = parse("mssql://U:P@H:1433/N").unwrap();
/// assert_eq!(config.connection_string(), "sqlserver://U:P@H:1433?database=N");
/// ```
pub fn parse(url: &str) -> DbUrlResult<DbConfig> {
    Parser::default().parse(url)
}

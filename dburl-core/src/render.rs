//! Driver connection string rendering.

use crate::config::DbConfig;
use crate::dialect::Dialect;

/// Render the connection string a driver for the configuration's dialect
/// expects.
///
/// A configuration without a dialect renders to an empty string.
///
/// ```rust
/// use dburl_core::{parse, render};
///
/// let config = parse("postgres://U:P@H:5432/N").unwrap();
/// assert_eq!(
///     render(&config),
///     "host=H port=5432 user=U password=P dbname=N sslmode=disable"
/// );
/// ```
pub fn render(config: &DbConfig) -> String {
    match config.dialect {
        Some(Dialect::Mssql) => render_mssql(config),
        Some(Dialect::Postgres) => render_postgres(config),
        Some(Dialect::Sqlite) => config.path.clone(),
        None => String::new(),
    }
}

fn render_mssql(config: &DbConfig) -> String {
    format!(
        "sqlserver://{}:{}@{}:{}?database={}",
        config.user, config.password, config.host, config.port, config.dbname
    )
}

fn render_postgres(config: &DbConfig) -> String {
    format!(
        "host={} port={} user={} password={} dbname={} sslmode=disable",
        config.host, config.port, config.user, config.password, config.dbname
    )
}

//! Logging setup for dburl.
//!
//! Output is controlled by environment variables:
//!
//! - `DBURL_DEBUG=true|1|yes` - Enable debug logging
//! - `DBURL_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `DBURL_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! Subscriber installation needs the `tracing-subscriber` feature. Without
//! it [`init`] is a no-op and events only reach a subscriber the
//! application installs itself.
//!
//! ```rust,no_run
//! use dburl_core::logging;
//!
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

use tracing::Level;

/// Enables debug logging when truthy.
pub const DEBUG_VAR: &str = "DBURL_DEBUG";
/// Explicit log level.
pub const LEVEL_VAR: &str = "DBURL_LOG_LEVEL";
/// Output format.
pub const FORMAT_VAR: &str = "DBURL_LOG_FORMAT";

static INIT: Once = Once::new();

/// How events are formatted on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human readable output.
    Pretty,
    /// Single-line human readable output.
    Compact,
}

impl LogFormat {
    fn from_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "compact" => Self::Compact,
            _ => Self::Json,
        }
    }

    /// Lowercase name, as accepted in `DBURL_LOG_FORMAT`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Maximum level emitted by the dburl crates.
    pub level: Level,
    /// Output format.
    pub format: LogFormat,
}

impl LogSettings {
    /// Read settings from the process environment.
    ///
    /// Returns `None` when logging was not requested.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            env::var(DEBUG_VAR).ok().as_deref(),
            env::var(LEVEL_VAR).ok().as_deref(),
            env::var(FORMAT_VAR).ok().as_deref(),
        )
    }

    /// Resolve settings from raw variable values.
    ///
    /// Logging is enabled by a truthy `debug` or by any `level`. An
    /// unrecognized level falls back to `debug` when `debug` is truthy and
    /// to `warn` otherwise.
    pub fn from_vars(
        debug: Option<&str>,
        level: Option<&str>,
        format: Option<&str>,
    ) -> Option<Self> {
        let debug = debug.is_some_and(is_truthy);
        if !debug && level.is_none() {
            return None;
        }

        let fallback = if debug { Level::DEBUG } else { Level::WARN };
        let level = level
            .and_then(|l| match l.to_ascii_lowercase().as_str() {
                "trace" => Some(Level::TRACE),
                "debug" => Some(Level::DEBUG),
                "info" => Some(Level::INFO),
                "warn" => Some(Level::WARN),
                "error" => Some(Level::ERROR),
                _ => None,
            })
            .unwrap_or(fallback);

        Some(Self {
            level,
            format: format.map(LogFormat::from_value).unwrap_or_default(),
        })
    }

    /// `EnvFilter` directive limiting output to the dburl crates.
    pub fn filter_directive(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        ["dburl", "dburl_core", "dburl_cli"]
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Initialize logging. Subsequent calls are no-ops.
///
/// Nothing is installed unless `DBURL_DEBUG` or `DBURL_LOG_LEVEL` is set.
/// Events are written to stderr so stdout stays clean for rendered output.
pub fn init() {
    INIT.call_once(|| {
        let Some(settings) = LogSettings::from_env() else {
            return;
        };

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(settings.filter_directive())
                .unwrap_or_else(|_| EnvFilter::new("warn"));
            let layer = fmt::layer().with_writer(std::io::stderr);
            let registry = tracing_subscriber::registry().with(filter);

            match settings.format {
                LogFormat::Json => registry.with(layer.json()).init(),
                LogFormat::Compact => registry.with(layer.compact()).init(),
                LogFormat::Pretty => registry.with(layer.pretty()).init(),
            }

            tracing::info!(
                level = %settings.level,
                format = settings.format.as_str(),
                "dburl logging initialized"
            );
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        let _ = settings;
    });
}

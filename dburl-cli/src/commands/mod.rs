//! CLI command implementations.

pub mod check;
pub mod parse;
pub mod render;
pub mod version;

use std::path::Path;

use dburl_core::{DbConfig, Parser, StdEnvSource};
use tracing::debug;

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::error::CliResult;

/// Resolve the descriptor named by `args` and parse it.
///
/// A positional URL wins over the environment. The variable name comes from
/// `--env`, then the config file, then `DATABASE_URL`.
pub fn load_descriptor(args: &SourceArgs, config_path: Option<&Path>) -> CliResult<DbConfig> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(config_path, &cwd)?;
    let parser = Parser::new(args.parse_options(config.parse));

    let db_config = match &args.url {
        Some(url) => parser.parse(url)?,
        None => {
            let var = args.env.as_deref().unwrap_or(&config.source.env);
            debug!(var = %var, "Reading descriptor from environment");
            parser.load_from_source(&StdEnvSource, var)?
        }
    };

    Ok(db_config)
}

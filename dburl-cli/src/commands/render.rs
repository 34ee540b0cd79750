//! `dburl render` command - Print the driver connection string.

use std::path::Path;

use crate::cli::RenderArgs;
use crate::error::CliResult;

/// Run the render command
///
/// Output is undecorated so it can be captured by a shell.
pub fn run(args: RenderArgs, config_path: Option<&Path>) -> CliResult<()> {
    let config = super::load_descriptor(&args.source, config_path)?;
    println!("{}", config.connection_string());
    Ok(())
}

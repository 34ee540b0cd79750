//! `dburl check` command - Validate a descriptor.

use std::path::Path;

use crate::cli::CheckArgs;
use crate::error::CliResult;
use crate::output::success;

/// Run the check command
pub fn run(args: CheckArgs, config_path: Option<&Path>) -> CliResult<()> {
    let config = super::load_descriptor(&args.source, config_path)?;
    let dialect = config.dialect.map(|d| d.name()).unwrap_or("none");
    success(&format!("Descriptor is valid ({})", dialect));
    Ok(())
}

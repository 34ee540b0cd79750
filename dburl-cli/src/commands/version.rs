//! `dburl version` command - Display version information.

use dburl_core::{DEFAULT_ENV, Dialect};

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::header("dburl");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);
    kv("Default variable", DEFAULT_ENV);

    output::newline();
    output::section("Dialects");
    for dialect in Dialect::ALL {
        output::list_item(&dialect.aliases().join(", "));
    }

    Ok(())
}

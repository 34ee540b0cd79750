//! `dburl parse` command - Print the fields of a descriptor.

use std::path::Path;

use dburl_core::DbConfig;

use crate::cli::ParseArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the parse command
pub fn run(args: ParseArgs, config_path: Option<&Path>) -> CliResult<()> {
    let mut config = super::load_descriptor(&args.source, config_path)?;

    if args.json {
        if !args.show_password {
            config.password = output::mask(&config.password);
        }
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    output::header("Database Configuration");
    print_fields(&config, args.show_password);
    output::newline();

    Ok(())
}

fn print_fields(config: &DbConfig, show_password: bool) {
    let dialect = config.dialect.map(|d| d.name()).unwrap_or("none");
    kv("Dialect", dialect);

    if config.is_network() {
        kv("Host", &config.host);
        kv("Port", &config.port.to_string());
        kv("User", &config.user);
        if show_password {
            kv("Password", &config.password);
        } else {
            kv("Password", &output::mask(&config.password));
        }
        kv("Database", &config.dbname);
    } else {
        kv("Path", &config.path);
        if config.is_memory() {
            output::dim("  (in-memory database)");
        }
    }
}

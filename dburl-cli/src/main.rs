//! dburl CLI - Command-line interface for dburl.

use clap::Parser;
use miette::Diagnostic;

use dburl_cli::cli::{Cli, Command};
use dburl_cli::commands;
use dburl_cli::error::CliResult;
use dburl_cli::output;
use dburl_core::logging;

fn main() {
    logging::init();

    if let Err(e) = run() {
        output::error(&e.to_string());
        if let Some(help) = e.help() {
            output::hint(&help.to_string());
        }
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Parse(args) => commands::parse::run(args, config_path),
        Command::Render(args) => commands::render::run(args, config_path),
        Command::Check(args) => commands::check::run(args, config_path),
        Command::Version => commands::version::run(),
    }
}

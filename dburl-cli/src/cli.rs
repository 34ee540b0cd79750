//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use dburl_core::{ParseOptions, PortPolicy};

/// dburl - Database connection configuration from a single descriptor
#[derive(Parser, Debug)]
#[command(name = "dburl")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "dburl - Database connection configuration from a single descriptor", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a dburl.toml config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a descriptor and print its fields
    Parse(ParseArgs),

    /// Render the driver connection string for a descriptor
    Render(RenderArgs),

    /// Check that a descriptor is valid
    Check(CheckArgs),

    /// Display version information
    Version,
}

/// Where the descriptor comes from, shared by every descriptor command
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Descriptor to use instead of reading the environment
    pub url: Option<String>,

    /// Environment variable holding the descriptor
    #[arg(short, long, value_name = "VAR")]
    pub env: Option<String>,

    /// Treat an invalid port as 0 instead of failing
    #[arg(long)]
    pub lenient_port: bool,
}

impl SourceArgs {
    /// Apply command-line overrides to the configured parse options.
    pub fn parse_options(&self, configured: ParseOptions) -> ParseOptions {
        if self.lenient_port {
            ParseOptions {
                port_policy: PortPolicy::Lenient,
            }
        } else {
            configured
        }
    }
}

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the configuration as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the password instead of masking it
    #[arg(long)]
    pub show_password: bool,
}

/// Arguments for the `render` command
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from(["dburl", "render", "--env", "DB_URL", "--lenient-port"])
            .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.source.env.as_deref(), Some("DB_URL"));
        assert_eq!(args.source.url, None);
        assert_eq!(
            args.source.parse_options(ParseOptions::strict()),
            ParseOptions::lenient()
        );
    }

    #[test]
    fn test_parse_positional_url() {
        let cli = Cli::try_parse_from(["dburl", "parse", "sqlite://:memory:", "--json"]).unwrap();
        let Command::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(args.source.url.as_deref(), Some("sqlite://:memory:"));
        assert!(args.json);
        assert_eq!(
            args.source.parse_options(ParseOptions::lenient()),
            ParseOptions::lenient()
        );
    }
}

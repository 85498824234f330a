//! Command-line interface definitions and parsing
//!
//! Defines the complete CLI structure for vitrine using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive tile preview with live set lookup (default)
//! - **render**: Resolve a query once and print the tiles to stdout
//! - **list**: List the available sample sets
//! - **config**: Inspect the configuration
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `b` for `browse`, `r` for `render`)
//! - `render --json` emits the resolved tiles in their wire shape

use clap::{Parser, Subcommand};

/// Terminal previewer for typed dashboard tiles with sample-set lookup
#[derive(Parser, Debug, Clone)]
#[command(name = "vitrine", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive tile preview (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Query to open with (overrides the configured initial query)
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Resolve a query once and print the tiles
    #[command(visible_alias = "r")]
    Render {
        /// Query to resolve against the sample set names
        #[arg(value_name = "QUERY")]
        query: String,

        /// Emit the resolved tiles as JSON instead of text
        #[arg(long = "json")]
        json: bool,
    },

    /// List the available sample sets
    #[command(visible_alias = "ls")]
    List,

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration inspection subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Print the path of the config file
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { query: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = Cli::parse_from(["vitrine"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Browse { query: None }
        ));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_render_with_json_flag() {
        let cli = Cli::parse_from(["vitrine", "render", "go", "--json"]);
        match cli.get_command() {
            Commands::Render { query, json } => {
                assert_eq!(query, "go");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_aliases() {
        assert!(matches!(
            Cli::parse_from(["vitrine", "b", "cl"]).get_command(),
            Commands::Browse { query: Some(q) } if q == "cl"
        ));
        assert!(matches!(
            Cli::parse_from(["vitrine", "ls"]).get_command(),
            Commands::List
        ));
    }

    #[test]
    fn test_global_quiet_after_subcommand() {
        let cli = Cli::parse_from(["vitrine", "list", "--quiet"]);
        assert!(cli.quiet);
    }
}

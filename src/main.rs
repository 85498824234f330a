//! Vitrine CLI application entry point
//!
//! Terminal previewer for a small dashboard of typed tiles. A free-text
//! query selects a named sample set by unambiguous prefix match; the
//! resolved tiles are rendered interactively (ratatui) or once to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Interactive preview (default command), opens with the configured query
//! vitrine
//! vitrine browse barclays
//!
//! # Resolve once and print the tiles
//! vitrine render go
//! vitrine render cl --json
//!
//! # List the available sample sets
//! vitrine list
//! vitrine -q list
//!
//! # Inspect the configuration
//! vitrine config show
//! vitrine config path
//! ```
//!
//! # Configuration
//!
//! Stored in the user's config directory
//! (`~/.config/vitrine/config.toml` on Linux): the query the preview
//! opens with, the color theme, and default verbosity.

use colored::Colorize;
use vitrine::{
    cli::{Cli, Commands, ConfigCommands},
    config::VitrineConfig,
    output, resolve,
    samples::SampleRegistry,
    ui::{App, Theme},
    VitrineError,
};

type Result<T> = std::result::Result<T, VitrineError>;

fn run() -> Result<()> {
    let config = VitrineConfig::load()?;
    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;
    let registry = SampleRegistry::builtin();

    match cli.get_command() {
        Commands::Browse { query } => {
            let initial = query.as_deref().unwrap_or(&config.initial_query);
            let app = App::new(Theme::from_choice(config.theme));
            app.run(registry, initial)?;
        }
        Commands::Render { query, json } => {
            let resolution = resolve::resolve(&registry, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&resolution.tiles)?);
            } else if resolution.is_match() {
                if !quiet {
                    println!(
                        "{}",
                        output::set_with_count(&resolution.label, resolution.tiles.len(), false)
                            .trim_start()
                    );
                    println!();
                }
                println!("{}", output::render_tiles(&resolution.tiles));
            } else if !quiet {
                println!("No set matches '{}'", resolution.label);
            }
        }
        Commands::List => {
            if !quiet {
                println!("Sample sets:");
            }
            println!("{}", output::list_sets(&registry, quiet));
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!("initial_query = {}", config.initial_query);
                println!("theme = {:?}", config.theme);
                println!("quiet = {}", config.quiet);
            }
            ConfigCommands::Path => {
                println!("{}", VitrineConfig::config_path()?.display());
            }
        },
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

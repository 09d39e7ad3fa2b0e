//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::logging;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli.output.or(config.output_format).unwrap_or_default();

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        explain: cli.explain || config.explain_by_default,
        verbose: cli.verbose,
        config,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Device(args) => commands::device::execute(&ctx, args),
        Commands::Website(args) => commands::website::execute(&ctx, args),
        Commands::Password(args) => commands::password::execute(&ctx, args),
        Commands::Quiz(args) => commands::quiz::execute(&ctx, args),
        Commands::Lessons(args) => commands::lessons::execute(&ctx, args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

//! pscode-syntax - syntax bundle synchronizer
//!
//! Keeps a local copy of the pscode syntax highlighting bundle in the
//! documentation site's asset directory and exposes the site configuration
//! that registers the grammar with the highlighter.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod fetch;
mod git;
mod grammar;
mod hash;
mod logging;
mod progress;
mod sync;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let project = cli.project.as_deref();
    let config_file = cli.config.as_deref();

    let result = match &cli.command {
        None => commands::sync::run(project, config_file, cli.verbose, &cli.sync),
        Some(Commands::Sync(args)) => commands::sync::run(project, config_file, cli.verbose, args),
        Some(Commands::SiteConfig(args)) => commands::site::run(project, config_file, args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}

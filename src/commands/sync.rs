//! Sync command implementation

use std::path::Path;

use console::Style;

use crate::cli::SyncArgs;
use crate::config::SyncConfig;
use crate::error::Result;
use crate::fetch;
use crate::progress::ConsoleProgress;
use crate::sync;

/// Run sync command
pub fn run(
    project: Option<&Path>,
    config_file: Option<&Path>,
    verbose: bool,
    args: &SyncArgs,
) -> Result<()> {
    let root = super::project_root(project)?;
    let config = SyncConfig::load(&root, config_file, args.to_settings())?;
    tracing::debug!(?config, "effective sync configuration");

    let fetcher = fetch::for_config(&config);
    let progress = ConsoleProgress::new(fetcher.describe(), verbose);
    progress.header();

    let report = match sync::sync(&config, fetcher.as_ref(), &progress) {
        Ok(report) => report,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    println!();
    println!(
        "{}",
        Style::new()
            .green()
            .bold()
            .apply_to("✓ Syntax highlighting setup complete!")
    );
    println!("  {}", report.summary());
    if !report.subdirectory_found {
        tracing::info!(subdirectory = %config.subdirectory, "bundle has no subdirectory to copy");
    }

    Ok(())
}

//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SyncSettings;

/// pscode-syntax - syntax bundle synchronizer for the pscode documentation site
///
/// Mirrors the pscode syntax highlighting bundle into the site's asset
/// directory and emits the site configuration that registers the grammar.
#[derive(Parser, Debug)]
#[command(
    name = "pscode-syntax",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sync the pscode syntax bundle and configure the documentation site",
    long_about = "pscode-syntax fetches the pscode syntax highlighting bundle, copies the \
                  language configuration, example and grammar files into the site's asset \
                  directory, and prints the site configuration that registers the grammar. \
                  Running without a subcommand performs a sync.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pscode-syntax\n    \
                  pscode-syntax sync --remote ../pscode-syntax-highlighter\n    \
                  pscode-syntax site-config > site.config.json\n    \
                  pscode-syntax site-config --resolve pseudo\n\n\
                  \x1b[1m\x1b[32mConfiguration:\x1b[0m\n    \
                  pscode-syntax.yaml in the project root (optional)"
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "PSCODE_SYNTAX_PROJECT")]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to pscode-syntax.yaml in the project root)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Sync flags, used when no subcommand is given
    #[command(flatten)]
    pub sync: SyncArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the syntax bundle and copy it into the asset directory (default)
    #[command(after_help = "EXAMPLES:\n  \
                  Sync with the defaults:\n    pscode-syntax sync\n\n\
                  Sync from a local checkout:\n    pscode-syntax sync --remote ../pscode-syntax-highlighter\n\n\
                  Sync into another asset directory:\n    pscode-syntax sync --asset-dir public/lang\n\n\
                  Copy a custom file list:\n    pscode-syntax sync --file language-configuration.json --file README.md")]
    Sync(SyncArgs),

    /// Print the documentation site configuration as JSON
    SiteConfig(SiteConfigArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Every flag overrides the matching key of `pscode-syntax.yaml`. Also
// flattened into `Cli`, so command-level attributes belong on the variant.
#[derive(Args, Debug, Default, Clone)]
pub struct SyncArgs {
    /// Bundle location: git URL or local directory
    #[arg(long, env = "PSCODE_SYNTAX_REMOTE", value_name = "URL")]
    pub remote: Option<String>,

    /// Transient directory the bundle is fetched into
    #[arg(long, value_name = "DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Directory the selected files are copied into
    #[arg(long, value_name = "DIR")]
    pub asset_dir: Option<PathBuf>,

    /// Top-level bundle file to copy (repeatable, replaces the default list)
    #[arg(long = "file", value_name = "NAME")]
    pub files: Vec<String>,

    /// Bundle subdirectory whose files are copied
    #[arg(long, value_name = "NAME")]
    pub subdirectory: Option<String>,

    /// Maximum time to wait for the fetch, cancellation included
    #[arg(long, value_name = "SECONDS")]
    pub fetch_timeout: Option<u64>,
}

impl SyncArgs {
    /// The settings layer these flags contribute
    pub fn to_settings(&self) -> SyncSettings {
        SyncSettings {
            remote: self.remote.clone(),
            staging_dir: self.staging_dir.clone(),
            asset_dir: self.asset_dir.clone(),
            files: (!self.files.is_empty()).then(|| self.files.clone()),
            subdirectory: self.subdirectory.clone(),
            fetch_timeout: self.fetch_timeout,
        }
    }
}

/// Arguments for the site-config command
#[derive(Args, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the site configuration:\n    pscode-syntax site-config\n\n\
                  Write compact JSON for the site build:\n    pscode-syntax site-config --compact > site.config.json\n\n\
                  Show which language a fence tag selects:\n    pscode-syntax site-config --resolve commonps")]
pub struct SiteConfigArgs {
    /// Directory holding the synced assets
    #[arg(long, value_name = "DIR")]
    pub asset_dir: Option<PathBuf>,

    /// Subdirectory holding the grammar
    #[arg(long, value_name = "NAME")]
    pub subdirectory: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Print only the language registration selected by this fence tag
    #[arg(long, value_name = "TAG")]
    pub resolve: Option<String>,
}

impl SiteConfigArgs {
    pub fn to_settings(&self) -> SyncSettings {
        SyncSettings {
            asset_dir: self.asset_dir.clone(),
            subdirectory: self.subdirectory.clone(),
            ..Default::default()
        }
    }
}

/// Arguments for completions command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pscode-syntax completions --shell bash > ~/.bash_completion.d/pscode-syntax\n\n\
                  Generate zsh completions:\n    pscode-syntax completions --shell zsh > ~/.zfunc/_pscode-syntax\n\n\
                  Generate fish completions:\n    pscode-syntax completions --shell fish > ~/.config/fish/completions/pscode-syntax.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: Shell,
}

//! Console progress for sync runs

use std::cell::RefCell;
use std::time::Duration;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::PscodeError;
use crate::sync::{CopiedFile, SyncObserver, SyncStep};

const SPINNER_TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Prints sync progress to the terminal
///
/// Steps and copied files go to stdout, warnings to stderr. While the bundle
/// is fetched a spinner is drawn on stderr if it is a terminal.
pub struct ConsoleProgress {
    /// Verb describing the fetch, e.g. "Cloning"
    fetch_verb: &'static str,
    verbose: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new(fetch_verb: &'static str, verbose: bool) -> Self {
        Self {
            fetch_verb,
            verbose,
            spinner: RefCell::new(None),
        }
    }

    /// Print the banner shown before a sync starts
    pub fn header(&self) {
        println!(
            "{}",
            Style::new()
                .bold()
                .apply_to("Setting up pscode syntax highlighting...")
        );
    }

    /// Stop the spinner after a failed run
    pub fn abandon(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.abandon();
        }
    }

    fn start_spinner(&self, remote: &str) {
        if !Term::stderr().is_term() {
            println!("{} {}...", self.fetch_verb, remote);
            return;
        }

        let pb = ProgressBar::new_spinner();
        let template = format!("{{spinner}} {} {{msg}}", self.fetch_verb);
        match ProgressStyle::default_spinner().template(&template) {
            Ok(style) => pb.set_style(style.tick_strings(SPINNER_TICKS)),
            Err(e) => tracing::debug!("invalid spinner template: {e}"),
        }
        pb.set_message(remote.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn finish_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl SyncObserver for ConsoleProgress {
    fn on_step(&self, step: SyncStep, detail: &str) {
        match step {
            SyncStep::RemovedStale => {
                println!("Removed stale staging directory {detail}");
            }
            SyncStep::Fetching => self.start_spinner(detail),
            SyncStep::Fetched => {
                self.finish_spinner();
                println!("{} Fetched {}", Style::new().green().apply_to("✓"), detail);
            }
            SyncStep::CopyingFiles => println!("Copying language files..."),
            SyncStep::CopyingSubdirectory => println!("Copying {detail}..."),
            SyncStep::CleaningUp => println!("Cleaning up..."),
        }
    }

    fn on_copied(&self, file: &CopiedFile) {
        let outcome = Style::new().dim().apply_to(format!("({})", file.outcome));
        if self.verbose {
            println!(
                "  {} Copied {} {} {}",
                Style::new().green().apply_to("✓"),
                file.name,
                outcome,
                Style::new().dim().apply_to(&file.digest)
            );
        } else {
            println!(
                "  {} Copied {} {}",
                Style::new().green().apply_to("✓"),
                file.name,
                outcome
            );
        }
    }

    fn on_missing(&self, name: &str) {
        eprintln!(
            "  {} {} not found in bundle",
            Style::new().yellow().apply_to("⚠"),
            name
        );
    }

    fn on_skipped(&self, name: &str) {
        eprintln!(
            "  {} Skipped {} (not a file)",
            Style::new().yellow().apply_to("⚠"),
            name
        );
    }

    fn on_cleanup_failed(&self, error: &PscodeError) {
        eprintln!(
            "{} Could not clean up staging directory: {}",
            Style::new().yellow().apply_to("⚠"),
            error
        );
    }
}

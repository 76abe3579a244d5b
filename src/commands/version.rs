//! Version command implementation

use crate::config::sync::DEFAULT_REMOTE;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("pscode-syntax {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Default bundle: {DEFAULT_REMOTE}");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

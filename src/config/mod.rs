//! Configuration handling for pscode-syntax
//!
//! This module contains data structures for:
//! - `pscode-syntax.yaml` - Optional sync settings file in the project root
//! - The effective, resolved [`SyncConfig`] handed to the synchronizer
//! - The documentation site configuration built around the synced grammar

pub mod site;
pub mod sync;

// Re-export commonly used types
pub use site::SiteConfig;
pub use sync::{SyncConfig, SyncSettings};

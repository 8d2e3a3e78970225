//! CLI module
//!
//! Command-line preview tool for the pager.
//!
//! # Commands
//!
//! - `window` - Show which page indices would be rendered
//! - `render` - Render pagination markup with the configured bundles
//! - `bundles` - List available message bundles

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;

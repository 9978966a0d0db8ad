//! CLI module
//!
//! Command-line interface for trying out pagination against a URL.
//!
//! # Commands
//!
//! - `state` - Print offset, limit and page URLs
//! - `links` - Print numbered pagination links
//! - `pager` - Print previous/next links
//! - `presets` - List the style presets

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;

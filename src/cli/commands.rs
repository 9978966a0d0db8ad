//! CLI commands and argument parsing

use crate::style::Preset;
use crate::types::{LogLevel, DEFAULT_PAD, DEFAULT_PER_PAGE, DEFAULT_QUERY_KEY};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Pager CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Query parameter holding the page
    #[arg(short, long, global = true, default_value = DEFAULT_QUERY_KEY)]
    pub key: String,

    /// Records per page
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u64,

    /// CSS framework preset
    #[arg(short, long, global = true, value_enum, default_value_t = Preset::Bootstrap)]
    pub preset: Preset,

    /// Style file (YAML or JSON), takes precedence over --preset
    #[arg(short, long, global = true)]
    pub style: Option<PathBuf>,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level
    pub fn effective_log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => LogLevel::Debug,
            (None, false) => LogLevel::Info,
        }
    }
}

/// Arguments describing the request being paginated
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// URL of the request, e.g. "/posts?page=3of12"
    #[arg(short, long, default_value = "")]
    pub url: String,

    /// Total number of records, used when the URL does not carry the page count
    #[arg(short, long)]
    pub total: Option<u64>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the pagination state
    State {
        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Print numbered pagination links
    Links {
        #[command(flatten)]
        page: PageArgs,

        /// Neighbouring links on each side of the current page
        #[arg(long, default_value_t = DEFAULT_PAD)]
        pad: u32,
    },

    /// Print previous/next pager links
    Pager {
        #[command(flatten)]
        page: PageArgs,

        /// Label of the previous link (empty to leave it out)
        #[arg(long, default_value = "Previous")]
        previous: String,

        /// Label of the next link (empty to leave it out)
        #[arg(long, default_value = "Next")]
        next: String,
    },

    /// List style presets
    Presets,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}

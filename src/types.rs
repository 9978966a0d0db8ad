//! Common types used throughout Solidafy Pager
//!
//! This module contains shared type aliases and small utility types
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values (decoded query params)
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Defaults
// ============================================================================

/// Query parameter used when none is given
pub const DEFAULT_QUERY_KEY: &str = "page";

/// Records per page used when none is given
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Neighbouring links shown on each side of the active page
pub const DEFAULT_PAD: u32 = 3;

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line tool
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for optional strings to treat empty strings as absent
pub trait OptionStrExt<'a> {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<&'a str>;
}

impl<'a> OptionStrExt<'a> for Option<&'a str> {
    fn none_if_empty(self) -> Option<&'a str> {
        self.filter(|s| !s.is_empty())
    }
}

impl<'a> OptionStrExt<'a> for &'a Option<String> {
    fn none_if_empty(self) -> Option<&'a str> {
        self.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        let level: tracing::Level = LogLevel::Warn.into();
        assert_eq!(level, tracing::Level::WARN);
    }

    #[test]
    fn test_log_level_serde() {
        let level: LogLevel = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(level, LogLevel::Trace);

        let json = serde_json::to_string(&LogLevel::default()).unwrap();
        assert_eq!(json, "\"info\"");
    }

    #[test]
    fn test_option_str_none_if_empty() {
        assert_eq!(Some("test").none_if_empty(), Some("test"));
        assert_eq!(Some("").none_if_empty(), None);
        assert_eq!(None::<&str>.none_if_empty(), None);

        let owned = Some(String::from("&raquo;"));
        assert_eq!((&owned).none_if_empty(), Some("&raquo;"));
        let empty = Some(String::new());
        assert_eq!((&empty).none_if_empty(), None);
    }
}

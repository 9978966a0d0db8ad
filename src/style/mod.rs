//! Style module
//!
//! Markup templates for the pagination widgets.
//!
//! # Overview
//!
//! - `StyleConfig` - templates for the links and pager widgets
//! - `Preset` - CSS framework presets (Bootstrap baseline plus overrides)
//! - `StyleDefinition` - YAML/JSON style files

mod loader;
mod presets;
mod types;

pub use loader::{load_style, load_style_from_str, StyleDefinition};
pub use presets::{Override, Preset};
pub use types::{
    LinkOverrides, LinkRole, LinksStyle, PagerOverrides, PagerRole, PagerStyle, StyleConfig,
};

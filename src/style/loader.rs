//! Style definition files
//!
//! A style file names a preset and overrides individual roles:
//!
//! ```yaml
//! preset: uikit
//! links:
//!   wrapper: '<ul class="uk-pagination uk-flex-center">{{ value }}</ul>'
//!   dots: null
//! pager:
//!   wrapper: '<nav>{{ value }}</nav>'
//! ```
//!
//! YAML is a superset of JSON, so JSON files load through the same path.

use super::presets::Preset;
use super::types::{LinkOverrides, LinkRole, PagerOverrides, PagerRole, StyleConfig};
use crate::error::{Error, Result, ResultExt};
use crate::template;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Declarative style: a preset plus role overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleDefinition {
    /// Preset the overrides are applied to
    #[serde(default)]
    pub preset: Preset,

    /// Links widget overrides
    #[serde(default)]
    pub links: LinkOverrides,

    /// Pager widget overrides
    #[serde(default)]
    pub pager: PagerOverrides,
}

impl StyleDefinition {
    /// Build the final style: preset first, then overrides
    pub fn build(&self) -> StyleConfig {
        let mut config = StyleConfig::preset(self.preset);
        config.links.merge(&self.links);
        config.pager.merge(&self.pager);
        config
    }
}

/// Load a style from a YAML or JSON file
pub fn load_style(path: impl AsRef<Path>) -> Result<StyleConfig> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::config(format!(
                "Style file '{}' not found",
                path.display()
            )));
        }
        Err(e) => {
            return Err(Error::Io(e))
                .with_context(|| format!("Failed to read style file '{}'", path.display()));
        }
    };
    tracing::debug!("Loaded style file {}", path.display());
    load_style_from_str(&content)
}

/// Load a style from a YAML or JSON string
pub fn load_style_from_str(content: &str) -> Result<StyleConfig> {
    let def: StyleDefinition = if content.trim().is_empty() {
        StyleDefinition::default()
    } else {
        serde_yaml::from_str(content)?
    };

    validate_definition(&def)?;
    Ok(def.build())
}

/// Validate the overrides of a style definition
fn validate_definition(def: &StyleDefinition) -> Result<()> {
    if let Some(Some(wrapper)) = def.links.get(&LinkRole::Wrapper) {
        require_placeholder("links.wrapper", wrapper, template::VALUE)?;
    }
    if let Some(Some(link)) = def.links.get(&LinkRole::Link) {
        require_placeholder("links.link", link, template::URL)?;
    }
    if let Some(Some(wrapper)) = def.pager.get(&PagerRole::Wrapper) {
        require_placeholder("pager.wrapper", wrapper, template::VALUE)?;
    }

    // Labels are substituted as values, never scanned themselves
    let labels = [
        ("links.previous", LinkRole::Previous),
        ("links.next", LinkRole::Next),
        ("links.dots", LinkRole::Dots),
    ];
    for (name, role) in labels {
        if let Some(Some(label)) = def.links.get(&role) {
            if template::has_placeholders(label) {
                tracing::warn!("Label '{}' contains placeholders that are never filled", name);
            }
        }
    }
    Ok(())
}

fn require_placeholder(role: &str, template: &str, name: &str) -> Result<()> {
    if template::uses(template, name) {
        Ok(())
    } else {
        Err(Error::config(format!(
            "Template for '{role}' must contain {{{{ {name} }}}}"
        )))
    }
}

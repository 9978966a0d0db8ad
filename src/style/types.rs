//! Style types
//!
//! A style is a set of markup templates keyed by role. `None` for a role means
//! "no markup": templates fall back to the bare value, and the `previous`,
//! `next` and `dots` link labels are left out entirely.

use super::presets::{self, Preset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Roles
// ============================================================================

/// Roles of the numbered links widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkRole {
    /// Wraps the whole list
    Wrapper,
    /// A clickable page
    Link,
    /// The current page
    Active,
    /// A non-clickable entry (the dots)
    Disabled,
    /// Label of the "previous page" arrow
    Previous,
    /// Label of the "next page" arrow
    Next,
    /// Label shown where pages are elided
    Dots,
}

impl LinkRole {
    /// All roles, in rendering-table order
    pub const ALL: [LinkRole; 7] = [
        LinkRole::Wrapper,
        LinkRole::Link,
        LinkRole::Active,
        LinkRole::Disabled,
        LinkRole::Previous,
        LinkRole::Next,
        LinkRole::Dots,
    ];
}

/// Roles of the previous/next pager widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagerRole {
    /// Wraps both links
    Wrapper,
    /// The "previous page" link
    Previous,
    /// The "next page" link
    Next,
}

impl PagerRole {
    /// All roles
    pub const ALL: [PagerRole; 3] = [PagerRole::Wrapper, PagerRole::Previous, PagerRole::Next];
}

/// Role overrides for the links widget; `None` clears a role
pub type LinkOverrides = BTreeMap<LinkRole, Option<String>>;

/// Role overrides for the pager widget; `None` clears a role
pub type PagerOverrides = BTreeMap<PagerRole, Option<String>>;

// ============================================================================
// Links Style
// ============================================================================

/// Templates for the numbered links widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksStyle {
    pub wrapper: Option<String>,
    pub link: Option<String>,
    pub active: Option<String>,
    pub disabled: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub dots: Option<String>,
}

impl LinksStyle {
    /// Get the template for a role
    pub fn get(&self, role: LinkRole) -> Option<&str> {
        self.slot(role).as_deref()
    }

    /// Replace the template for a role
    pub fn set(&mut self, role: LinkRole, template: Option<String>) -> &mut Self {
        *self.slot_mut(role) = template;
        self
    }

    /// Merge overrides on top of the current templates
    pub fn merge(&mut self, overrides: &LinkOverrides) -> &mut Self {
        for (role, template) in overrides {
            self.set(*role, template.clone());
        }
        self
    }

    fn slot(&self, role: LinkRole) -> &Option<String> {
        match role {
            LinkRole::Wrapper => &self.wrapper,
            LinkRole::Link => &self.link,
            LinkRole::Active => &self.active,
            LinkRole::Disabled => &self.disabled,
            LinkRole::Previous => &self.previous,
            LinkRole::Next => &self.next,
            LinkRole::Dots => &self.dots,
        }
    }

    fn slot_mut(&mut self, role: LinkRole) -> &mut Option<String> {
        match role {
            LinkRole::Wrapper => &mut self.wrapper,
            LinkRole::Link => &mut self.link,
            LinkRole::Active => &mut self.active,
            LinkRole::Disabled => &mut self.disabled,
            LinkRole::Previous => &mut self.previous,
            LinkRole::Next => &mut self.next,
            LinkRole::Dots => &mut self.dots,
        }
    }
}

impl Default for LinksStyle {
    fn default() -> Self {
        let mut style = Self {
            wrapper: None,
            link: None,
            active: None,
            disabled: None,
            previous: None,
            next: None,
            dots: None,
        };
        for &(role, template) in presets::BASELINE_LINKS {
            style.set(role, Some(template.to_string()));
        }
        style
    }
}

// ============================================================================
// Pager Style
// ============================================================================

/// Templates for the previous/next pager widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerStyle {
    pub wrapper: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl PagerStyle {
    /// Get the template for a role
    pub fn get(&self, role: PagerRole) -> Option<&str> {
        match role {
            PagerRole::Wrapper => self.wrapper.as_deref(),
            PagerRole::Previous => self.previous.as_deref(),
            PagerRole::Next => self.next.as_deref(),
        }
    }

    /// Replace the template for a role
    pub fn set(&mut self, role: PagerRole, template: Option<String>) -> &mut Self {
        match role {
            PagerRole::Wrapper => self.wrapper = template,
            PagerRole::Previous => self.previous = template,
            PagerRole::Next => self.next = template,
        }
        self
    }

    /// Merge overrides on top of the current templates
    pub fn merge(&mut self, overrides: &PagerOverrides) -> &mut Self {
        for (role, template) in overrides {
            self.set(*role, template.clone());
        }
        self
    }
}

impl Default for PagerStyle {
    fn default() -> Self {
        let mut style = Self {
            wrapper: None,
            previous: None,
            next: None,
        };
        for &(role, template) in presets::BASELINE_PAGER {
            style.set(role, Some(template.to_string()));
        }
        style
    }
}

// ============================================================================
// Style Config
// ============================================================================

/// Complete markup configuration for both widgets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Numbered links templates
    pub links: LinksStyle,
    /// Previous/next pager templates
    pub pager: PagerStyle,
}

impl StyleConfig {
    /// Bootstrap baseline with the preset's overrides applied
    pub fn preset(preset: Preset) -> Self {
        let mut config = Self::default();
        for &(role, template) in preset.link_overrides() {
            config.links.set(role, template.map(str::to_string));
        }
        for &(role, template) in preset.pager_overrides() {
            config.pager.set(role, template.map(str::to_string));
        }
        config
    }

    /// Override a single links template
    pub fn set_link(&mut self, role: LinkRole, template: Option<&str>) -> &mut Self {
        self.links.set(role, template.map(str::to_string));
        self
    }

    /// Override a single pager template
    pub fn set_pager(&mut self, role: PagerRole, template: Option<&str>) -> &mut Self {
        self.pager.set(role, template.map(str::to_string));
        self
    }
}

impl From<Preset> for StyleConfig {
    fn from(preset: Preset) -> Self {
        Self::preset(preset)
    }
}

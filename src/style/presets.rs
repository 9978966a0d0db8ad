//! CSS framework presets
//!
//! Every preset is the Bootstrap baseline plus a table of role overrides.
//! An override of `None` clears the role.

use super::types::{LinkRole, PagerRole};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role override table entry
pub type Override<R> = (R, Option<&'static str>);

// ============================================================================
// Baseline (http://getbootstrap.com/components/#pagination)
// ============================================================================

#[rustfmt::skip]
pub(crate) const BASELINE_LINKS: &[(LinkRole, &str)] = &[
    (LinkRole::Wrapper, r#"<ul class="pagination">{{ value }}</ul>"#),
    (LinkRole::Link, r#"<li><a href="{{ url }}">{{ value }}</a></li>"#),
    (LinkRole::Active, r#"<li class="active"><span>{{ value }}</span></li>"#),
    (LinkRole::Disabled, r#"<li class="disabled"><span>{{ value }}</span></li>"#),
    (LinkRole::Previous, "&laquo;"),
    (LinkRole::Next, "&raquo;"),
    (LinkRole::Dots, "&hellip;"),
];

#[rustfmt::skip]
pub(crate) const BASELINE_PAGER: &[(PagerRole, &str)] = &[
    (PagerRole::Wrapper, r#"<ul class="pager">{{ value }}</ul>"#),
    (
        PagerRole::Previous,
        r#"<li class="previous"><a href="{{ url }}">&laquo; {{ value }}</a></li>"#,
    ),
    (
        PagerRole::Next,
        r#"<li class="next"><a href="{{ url }}">{{ value }} &raquo;</a></li>"#,
    ),
];

// ============================================================================
// Override tables
// ============================================================================

// http://foundation.zurb.com/docs/components/pagination.html
#[rustfmt::skip]
const ZURB_FOUNDATION_LINKS: &[Override<LinkRole>] = &[
    (LinkRole::Active, Some(r#"<li class="current"><a href="">{{ value }}</a></li>"#)),
    (LinkRole::Disabled, Some(r#"<li class="unavailable"><a href="">{{ value }}</a></li>"#)),
];

// http://semantic-ui.com/collections/menu.html#pagination
#[rustfmt::skip]
const SEMANTIC_UI_LINKS: &[Override<LinkRole>] = &[
    (LinkRole::Wrapper, Some(r#"<div class="ui pagination menu">{{ value }}</div>"#)),
    (LinkRole::Link, Some(r#"<a class="item" href="{{ url }}">{{ value }}</a>"#)),
    (LinkRole::Active, Some(r#"<div class="active item">{{ value }}</div>"#)),
    (LinkRole::Disabled, Some(r#"<div class="disabled item">{{ value }}</div>"#)),
    (LinkRole::Previous, Some(r#"<i class="left arrow icon"></i>"#)),
    (LinkRole::Next, Some(r#"<i class="right arrow icon"></i>"#)),
];

// http://materializecss.com/pagination.html
#[rustfmt::skip]
const MATERIALIZE_LINKS: &[Override<LinkRole>] = &[
    (LinkRole::Link, Some(r#"<li class="waves-effect"><a href="{{ url }}">{{ value }}</a></li>"#)),
    (LinkRole::Active, Some(r##"<li class="active"><a href="#!">{{ value }}</a></li>"##)),
    (LinkRole::Disabled, Some(r##"<li class="disabled"><a href="#!">{{ value }}</a></li>"##)),
    (LinkRole::Previous, Some(r#"<i class="material-icons">keyboard_arrow_left</i>"#)),
    (LinkRole::Next, Some(r#"<i class="material-icons">keyboard_arrow_right</i>"#)),
];

// http://getuikit.com/docs/pagination.html
#[rustfmt::skip]
const UIKIT_LINKS: &[Override<LinkRole>] = &[
    (LinkRole::Wrapper, Some(r#"<ul class="uk-pagination">{{ value }}</ul>"#)),
    (LinkRole::Active, Some(r#"<li class="uk-active"><span>{{ value }}</span></li>"#)),
    (LinkRole::Disabled, Some(r#"<li class="uk-disabled"><span>{{ value }}</span></li>"#)),
    (LinkRole::Previous, Some(r#"<i class="uk-icon-angle-double-left"></i>"#)),
    (LinkRole::Next, Some(r#"<i class="uk-icon-angle-double-right"></i>"#)),
];

#[rustfmt::skip]
const UIKIT_PAGER: &[Override<PagerRole>] = &[
    (PagerRole::Wrapper, Some(r#"<ul class="uk-pagination">{{ value }}</ul>"#)),
    (
        PagerRole::Previous,
        Some(r#"<li class="uk-pagination-previous"><a href="{{ url }}"><i class="uk-icon-angle-double-left"></i> {{ value }}</a></li>"#),
    ),
    (
        PagerRole::Next,
        Some(r#"<li class="uk-pagination-next"><a href="{{ url }}">{{ value }} <i class="uk-icon-angle-double-right"></i></a></li>"#),
    ),
];

// ============================================================================
// Preset
// ============================================================================

/// CSS framework the markup is written for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Bootstrap,
    ZurbFoundation,
    SemanticUi,
    Materialize,
    Uikit,
}

impl Preset {
    /// All presets
    pub const ALL: [Preset; 5] = [
        Preset::Bootstrap,
        Preset::ZurbFoundation,
        Preset::SemanticUi,
        Preset::Materialize,
        Preset::Uikit,
    ];

    /// Identifier used in style files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Preset::Bootstrap => "bootstrap",
            Preset::ZurbFoundation => "zurb_foundation",
            Preset::SemanticUi => "semantic_ui",
            Preset::Materialize => "materialize",
            Preset::Uikit => "uikit",
        }
    }

    /// Links overrides applied on top of the baseline
    pub fn link_overrides(self) -> &'static [Override<LinkRole>] {
        match self {
            Preset::Bootstrap => &[],
            Preset::ZurbFoundation => ZURB_FOUNDATION_LINKS,
            Preset::SemanticUi => SEMANTIC_UI_LINKS,
            Preset::Materialize => MATERIALIZE_LINKS,
            Preset::Uikit => UIKIT_LINKS,
        }
    }

    /// Pager overrides applied on top of the baseline
    pub fn pager_overrides(self) -> &'static [Override<PagerRole>] {
        match self {
            Preset::Uikit => UIKIT_PAGER,
            _ => &[],
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                Error::unknown_preset(s, &names)
            })
    }
}

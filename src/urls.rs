//! Query-string editing for pagination links
//!
//! Pagination needs four things from the host's URL handling: read the query
//! parameters of a URL, add or replace one parameter, remove one parameter,
//! and know the URL of the current request. [`UrlEditor`] is that contract and
//! [`QueryUrl`] implements it on top of the `url` crate.
//!
//! Relative URLs (`/posts?page=2`, `?page=2`, `posts`, `//cdn.example.com/posts`)
//! are accepted and come back in the same shape they went in. Query segments
//! other than the one being edited are left exactly as written.

use crate::error::Result;
use crate::types::StringMap;
use std::sync::LazyLock;
use url::{form_urlencoded, Position, Url};

/// Origin used to resolve relative URLs; never appears in output
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://relative.invalid/").expect("static base URL is valid"));

/// URL operations pagination depends on
pub trait UrlEditor: std::fmt::Debug + Send + Sync {
    /// Decoded query parameters of `url`. Later duplicates win.
    fn query_params(&self, url: &str) -> StringMap;

    /// `url` without any `key` parameter
    fn without_param(&self, url: &str, key: &str) -> String;

    /// `url` with `key` set to `value`, replacing an existing value
    fn with_param(&self, url: &str, key: &str, value: &str) -> String;

    /// URL of the request being served
    fn current_url(&self) -> String;
}

/// How the caller wrote the URL, so it can be written back the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `https://example.com/posts?page=2`
    Absolute,
    /// `//example.com/posts?page=2`
    SchemeRelative,
    /// `/posts?page=2`
    Rooted,
    /// `posts?page=2`
    PathRelative,
    /// `?page=2` or empty
    QueryOnly,
}

impl Shape {
    fn serialize(self, url: &Url) -> String {
        match self {
            Shape::Absolute => url.to_string(),
            Shape::SchemeRelative => format!("//{}", &url[Position::BeforeUsername..]),
            Shape::Rooted => url[Position::BeforePath..].to_string(),
            Shape::PathRelative => url[Position::BeforePath..]
                .trim_start_matches('/')
                .to_string(),
            Shape::QueryOnly => url[Position::AfterPath..].to_string(),
        }
    }
}

fn parse(raw: &str) -> std::result::Result<(Url, Shape), url::ParseError> {
    match Url::parse(raw) {
        Ok(url) => Ok((url, Shape::Absolute)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let shape = if raw.is_empty() || raw.starts_with('?') || raw.starts_with('#') {
                Shape::QueryOnly
            } else if raw.starts_with("//") {
                Shape::SchemeRelative
            } else if raw.starts_with('/') {
                Shape::Rooted
            } else {
                Shape::PathRelative
            };
            let url = RELATIVE_BASE.join(raw)?;
            Ok((url, shape))
        }
        Err(e) => Err(e),
    }
}

/// Set `key` to `value` (or drop it when `None`) in a raw query string.
/// Segments for other keys are kept exactly as written.
fn rewrite_query(query: &str, key: &str, value: Option<&str>) -> String {
    let mut replacement = value.map(|value| {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(key, value)
            .finish()
    });
    let mut segments = Vec::new();
    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let matches = form_urlencoded::parse(segment.as_bytes())
            .next()
            .is_some_and(|(k, _)| k == key);
        if !matches {
            segments.push(segment.to_string());
        } else if let Some(pair) = replacement.take() {
            segments.push(pair);
        }
    }
    segments.extend(replacement);
    segments.join("&")
}

fn edit_query(raw: &str, key: &str, value: Option<&str>) -> String {
    match parse(raw) {
        Ok((mut url, shape)) => {
            let query = rewrite_query(url.query().unwrap_or_default(), key, value);
            url.set_query((!query.is_empty()).then_some(query.as_str()));
            shape.serialize(&url)
        }
        Err(e) => {
            tracing::warn!("Leaving unparseable URL '{}' unchanged: {}", raw, e);
            raw.to_string()
        }
    }
}

/// [`UrlEditor`] backed by the `url` crate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryUrl {
    current: String,
}

impl QueryUrl {
    /// Create an editor whose current request URL is `current`
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    /// Check that a URL can be edited
    pub fn validate(url: &str) -> Result<()> {
        parse(url)?;
        Ok(())
    }
}

impl UrlEditor for QueryUrl {
    fn query_params(&self, url: &str) -> StringMap {
        match parse(url) {
            Ok((url, _)) => url.query_pairs().into_owned().collect(),
            Err(e) => {
                tracing::warn!("Ignoring query of unparseable URL '{}': {}", url, e);
                StringMap::new()
            }
        }
    }

    fn without_param(&self, url: &str, key: &str) -> String {
        edit_query(url, key, None)
    }

    fn with_param(&self, url: &str, key: &str, value: &str) -> String {
        edit_query(url, key, Some(value))
    }

    fn current_url(&self) -> String {
        self.current.clone()
    }
}

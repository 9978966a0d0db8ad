//! Pagination state
//!
//! Tracks which page of a result set the current request is looking at.
//! The page lives in a single query parameter, either `3` or `3of12`; the
//! second form carries the total page count so that every page except the
//! last can skip counting records.

use crate::error::{Error, Result};
use crate::render::LinkRenderer;
use crate::style::StyleConfig;
use crate::types::{DEFAULT_PER_PAGE, DEFAULT_QUERY_KEY};
use crate::urls::{QueryUrl, UrlEditor};
use regex::Regex;
use serde::Serialize;
use std::sync::{Arc, LazyLock};

/// Query value: `<current>` or `<current>of<total>`
static PAGE_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:of(\d+))?$").unwrap());

/// Snapshot of every derived pagination value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Records to skip, starting at 0
    pub offset: u64,
    /// Records to take, absent when pagination is not set up
    pub length: Option<u64>,
    /// SQL suffix, e.g. `" LIMIT 30, 10"`
    pub limit: String,
    /// Whether the current page is the last one
    pub last_page: bool,
    /// Current page, starting at 1
    pub current_page: u64,
    /// Total pages, at least 1
    pub number_pages: u64,
    /// Link to the previous page
    pub previous_url: Option<String>,
    /// Link to the next page
    pub next_url: Option<String>,
}

/// Pagination state for one request
#[derive(Debug, Clone)]
pub struct Pagination {
    editor: Arc<dyn UrlEditor>,
    query_key: Option<String>,
    url: String,
    per_page: u64,
    offset: u64,
    current: u64,
    total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    /// Create inactive pagination using a [`QueryUrl`] with no current URL
    pub fn new() -> Self {
        Self::with_editor(QueryUrl::default())
    }

    /// Create inactive pagination on top of a host URL editor
    pub fn with_editor(editor: impl UrlEditor + 'static) -> Self {
        Self {
            editor: Arc::new(editor),
            query_key: None,
            url: String::new(),
            per_page: DEFAULT_PER_PAGE,
            offset: 0,
            current: 1,
            total: 1,
        }
    }

    /// Set up pagination from the query parameter `query_key` of `url`
    /// (the current request URL when `None`).
    ///
    /// Returns `true` when the URL already carries a valid total page count
    /// for a page that is neither the first nor the last, in which case
    /// [`set_total`](Self::set_total) can be skipped. Otherwise the caller
    /// should count its records and call `set_total`.
    ///
    /// ```
    /// use solidafy_pager::Pagination;
    ///
    /// let mut pagination = Pagination::new();
    /// if !pagination.set("page", 10, Some("/posts?page=4")).unwrap() {
    ///     pagination.set_total(100);
    /// }
    /// assert_eq!(pagination.offset(), 30);
    /// assert_eq!(pagination.total_pages(), 10);
    /// ```
    pub fn set(&mut self, query_key: &str, per_page: u64, url: Option<&str>) -> Result<bool> {
        if query_key.is_empty() {
            return Err(Error::invalid_argument("query_key", "cannot be empty"));
        }
        if per_page == 0 {
            return Err(Error::invalid_argument(
                "per_page",
                "must be greater than zero",
            ));
        }

        let url = url.map_or_else(|| self.editor.current_url(), str::to_string);
        self.query_key = Some(query_key.to_string());
        self.per_page = per_page;
        self.offset = 0;
        self.total = 1;
        self.current = 1;

        let params = self.editor.query_params(&url);
        self.url = url;

        let Some(raw) = params.get(query_key) else {
            return Ok(false);
        };
        let Some((current, total)) = parse_page_value(raw) else {
            tracing::debug!("Ignoring malformed page value {}={:?}", query_key, raw);
            return Ok(false);
        };
        if current <= 1 {
            return Ok(false);
        }
        let Some(offset) = (current - 1).checked_mul(per_page) else {
            tracing::debug!("Ignoring out of range page value {}={:?}", query_key, raw);
            return Ok(false);
        };

        self.current = current;
        self.offset = offset;
        tracing::debug!(
            "Parsed page {} (offset {}) from {}={:?}",
            current,
            offset,
            query_key,
            raw
        );

        match total {
            Some(total) if current < total => {
                self.total = total;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// [`set`](Self::set) with `"page"`, 10 per page and the current URL
    pub fn set_default(&mut self) -> Result<bool> {
        self.set(DEFAULT_QUERY_KEY, DEFAULT_PER_PAGE, None)
    }

    /// Tell the pagination how many records there are in total.
    ///
    /// Overwrites any total taken from the URL. Does nothing before `set`.
    pub fn set_total(&mut self, count: u64) {
        if self.query_key.is_none() {
            return;
        }
        self.total = if count > self.per_page {
            count.div_ceil(self.per_page)
        } else {
            1
        };
        tracing::debug!(
            "Total of {} records over {} per page is {} pages",
            count,
            self.per_page,
            self.total
        );
        if self.current > self.total {
            tracing::debug!(
                "Current page {} is beyond the last page {}",
                self.current,
                self.total
            );
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whether `set` has been called
    pub fn is_active(&self) -> bool {
        self.query_key.is_some()
    }

    /// Query parameter in use
    pub fn query_key(&self) -> Option<&str> {
        self.query_key.as_deref()
    }

    /// URL the page links are built from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw query value the page was read from, as the URL editor sees it
    pub fn page_value(&self) -> Option<String> {
        let key = self.query_key.as_deref()?;
        self.editor.query_params(&self.url).remove(key)
    }

    /// Records to skip, starting at 0
    pub fn offset(&self) -> u64 {
        if self.is_active() {
            self.offset
        } else {
            0
        }
    }

    /// Records per page, `None` before `set`
    pub fn length(&self) -> Option<u64> {
        self.is_active().then_some(self.per_page)
    }

    /// SQL suffix such as `" LIMIT 30, 10"`, empty before `set`
    pub fn limit(&self) -> String {
        if self.is_active() {
            format!(" LIMIT {}, {}", self.offset, self.per_page)
        } else {
            String::new()
        }
    }

    /// Whether the current page is the last one
    pub fn is_last_page(&self) -> bool {
        self.is_active() && self.current == self.total
    }

    /// Current page, starting at 1
    pub fn current_page(&self) -> u64 {
        if self.is_active() {
            self.current
        } else {
            1
        }
    }

    /// Total number of pages, at least 1
    pub fn total_pages(&self) -> u64 {
        if self.is_active() {
            self.total
        } else {
            1
        }
    }

    /// Link to the previous page, if there is one
    pub fn previous_url(&self) -> Option<String> {
        (self.is_active() && self.current > 1).then(|| self.page_url(self.current - 1))
    }

    /// Link to the next page, if there is one
    pub fn next_url(&self) -> Option<String> {
        (self.is_active() && self.current < self.total).then(|| self.page_url(self.current + 1))
    }

    /// Every derived value at once
    pub fn info(&self) -> PageInfo {
        PageInfo {
            offset: self.offset(),
            length: self.length(),
            limit: self.limit(),
            last_page: self.is_last_page(),
            current_page: self.current_page(),
            number_pages: self.total_pages(),
            previous_url: self.previous_url(),
            next_url: self.next_url(),
        }
    }

    /// The records of the current page, like `array_slice(records, offset, length)`
    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let Some(length) = self.length() else {
            return records;
        };
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let Some(rest) = records.get(start..) else {
            return &[];
        };
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        &rest[..length.min(rest.len())]
    }

    /// Link to page `page`. Page 1 drops the query parameter entirely.
    pub fn page_url(&self, page: u64) -> String {
        let Some(key) = &self.query_key else {
            return self.url.clone();
        };
        if page == 1 {
            self.editor.without_param(&self.url, key)
        } else {
            self.editor
                .with_param(&self.url, key, &format!("{}of{}", page, self.total))
        }
    }

    /// Renderer for this state in the given style
    pub fn renderer<'a>(&'a self, style: &'a StyleConfig) -> LinkRenderer<'a> {
        LinkRenderer::new(self, style)
    }
}

/// Split `3of12` into `(3, Some(12))`; `None` when malformed
fn parse_page_value(raw: &str) -> Option<(u64, Option<u64>)> {
    let caps = PAGE_VALUE_REGEX.captures(raw.trim())?;
    let current = caps.get(1)?.as_str().parse().ok()?;
    let total = match caps.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    Some((current, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_value() {
        assert_eq!(parse_page_value("3"), Some((3, None)));
        assert_eq!(parse_page_value("3of12"), Some((3, Some(12))));
        assert_eq!(parse_page_value(" 7of8 "), Some((7, Some(8))));
        assert_eq!(parse_page_value("0"), Some((0, None)));
    }

    #[test]
    fn test_parse_page_value_malformed() {
        assert_eq!(parse_page_value(""), None);
        assert_eq!(parse_page_value("abc"), None);
        assert_eq!(parse_page_value("-2"), None);
        assert_eq!(parse_page_value("3of"), None);
        assert_eq!(parse_page_value("of12"), None);
        assert_eq!(parse_page_value("3of12of20"), None);
        assert_eq!(parse_page_value("99999999999999999999999"), None);
    }
}

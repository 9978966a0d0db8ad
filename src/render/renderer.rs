//! Shared renderer plumbing

use crate::pagination::Pagination;
use crate::style::StyleConfig;
use crate::template;

/// Link target for a formatted fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Href<'a> {
    /// A page number, resolved through [`Pagination::page_url`]
    Page(u64),
    /// A literal URL. Numeric strings are treated as page numbers.
    Url(&'a str),
}

impl From<u64> for Href<'_> {
    fn from(page: u64) -> Self {
        Href::Page(page)
    }
}

impl<'a> From<&'a str> for Href<'a> {
    fn from(url: &'a str) -> Self {
        Href::Url(url)
    }
}

/// Renders a [`Pagination`] as markup in a [`StyleConfig`]
#[derive(Debug, Clone, Copy)]
pub struct LinkRenderer<'a> {
    pub(super) state: &'a Pagination,
    pub(super) style: &'a StyleConfig,
}

impl<'a> LinkRenderer<'a> {
    /// Create a renderer
    pub fn new(state: &'a Pagination, style: &'a StyleConfig) -> Self {
        Self { state, style }
    }

    /// Fill a style template.
    ///
    /// Without a template the bare `value` comes back. Without a `url`, a
    /// numeric `value` is taken as the page to link to.
    pub fn format(&self, template: Option<&str>, value: &str, url: Option<Href<'_>>) -> String {
        let Some(template) = template else {
            return value.to_string();
        };
        let href = match url.or_else(|| value.parse().ok().map(Href::Page)) {
            Some(Href::Page(page)) => self.state.page_url(page),
            Some(Href::Url(url)) => match url.parse() {
                Ok(page) => self.state.page_url(page),
                Err(_) => url.to_string(),
            },
            None => String::new(),
        };
        template::substitute(template, value, &href)
    }

    /// Format a page number with a template, linking to that page
    pub(super) fn page(&self, template: Option<&str>, page: u64) -> String {
        self.format(template, &page.to_string(), Some(Href::Page(page)))
    }
}

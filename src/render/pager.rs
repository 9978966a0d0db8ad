//! Previous/next pager

use super::renderer::{Href, LinkRenderer};

/// One side of the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerLink<'a> {
    /// Leave this side out
    #[default]
    Omit,
    /// Link to the adjacent page with this label, when there is one
    Label(&'a str),
    /// Link to `url` with `title`, whatever the pagination state
    Direct { url: &'a str, title: &'a str },
}

impl<'a> From<&'a str> for PagerLink<'a> {
    fn from(label: &'a str) -> Self {
        if label.is_empty() {
            PagerLink::Omit
        } else {
            PagerLink::Label(label)
        }
    }
}

impl<'a> From<Option<&'a str>> for PagerLink<'a> {
    fn from(label: Option<&'a str>) -> Self {
        label.map_or(PagerLink::Omit, PagerLink::from)
    }
}

impl<'a> From<&'a DirectLink> for PagerLink<'a> {
    fn from(link: &'a DirectLink) -> Self {
        PagerLink::Direct {
            url: &link.url,
            title: &link.title,
        }
    }
}

/// Owned `{url, title}` pair for pager links that bypass the pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectLink {
    pub url: String,
    pub title: String,
}

impl DirectLink {
    /// Create a direct link
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Direction of a pager link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Previous,
    Next,
}

impl LinkRenderer<'_> {
    /// Previous/next links.
    ///
    /// ```
    /// use solidafy_pager::{Pagination, StyleConfig};
    ///
    /// let mut pagination = Pagination::new();
    /// pagination.set("page", 10, Some("/posts")).unwrap();
    /// pagination.set_total(50);
    ///
    /// let style = StyleConfig::default();
    /// let html = pagination.renderer(&style).pager("Prev", "Next");
    /// assert!(html.contains(r#"<li class="next"><a href="/posts?page=2of5">Next &raquo;</a></li>"#));
    /// assert!(!html.contains("Prev"));
    /// ```
    pub fn pager<'p>(
        &self,
        previous: impl Into<PagerLink<'p>>,
        next: impl Into<PagerLink<'p>>,
    ) -> String {
        let mut links = String::new();
        links.push_str(&self.pager_side(previous.into(), Direction::Previous));
        links.push_str(&self.pager_side(next.into(), Direction::Next));

        if links.is_empty() {
            String::new()
        } else {
            format!("\n{}", self.format(self.style.pager.wrapper.as_deref(), &links, None))
        }
    }

    /// [`pager`](Self::pager) labelled "Previous" and "Next"
    pub fn pager_default(&self) -> String {
        self.pager("Previous", "Next")
    }

    fn pager_side(&self, link: PagerLink<'_>, direction: Direction) -> String {
        let template = match direction {
            Direction::Previous => self.style.pager.previous.as_deref(),
            Direction::Next => self.style.pager.next.as_deref(),
        };
        match link {
            PagerLink::Omit | PagerLink::Label("") => String::new(),
            PagerLink::Direct { url, title } => self.format(template, title, Some(Href::Url(url))),
            PagerLink::Label(label) => {
                let state = self.state;
                let current = state.current_page();
                let total = state.total_pages();
                if !state.is_active() || total <= 1 {
                    return String::new();
                }
                match direction {
                    Direction::Previous if current > 1 => {
                        self.format(template, label, Some(Href::Page(current - 1)))
                    }
                    Direction::Next if current < total => {
                        self.format(template, label, Some(Href::Page(current + 1)))
                    }
                    _ => String::new(),
                }
            }
        }
    }
}

//! Render module
//!
//! Turns a [`Pagination`](crate::Pagination) into markup.
//!
//! # Overview
//!
//! - [`LinkRenderer::links`] - numbered page links with dots
//! - [`LinkRenderer::pager`] - previous/next links
//! - [`LinkRenderer::format`] - fills a single style template
//!
//! ```
//! use solidafy_pager::{Pagination, Preset, StyleConfig};
//!
//! let mut pagination = Pagination::new();
//! if !pagination.set("page", 10, Some("/posts?page=3")).unwrap() {
//!     pagination.set_total(200);
//! }
//!
//! let style = StyleConfig::preset(Preset::Bootstrap);
//! let html = pagination.renderer(&style).links(3);
//! assert!(html.contains(r#"<li class="active"><span>3</span></li>"#));
//! ```

mod links;
mod pager;
mod renderer;

pub use pager::{DirectLink, PagerLink};
pub use renderer::{Href, LinkRenderer};

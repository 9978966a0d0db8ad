//! Numbered page links
//!
//! Shows a window of pages around the current one, `pad` on either side. Near
//! the edges the window slides so that the number of links stays the same.
//! With `dots` configured, the first and last pages are always reachable and
//! gaps of two or more pages collapse into a disabled dots entry; a gap of a
//! single page shows that page instead.

use super::renderer::{Href, LinkRenderer};
use crate::types::{OptionStrExt, DEFAULT_PAD};

impl LinkRenderer<'_> {
    /// Range of numbered pages shown, `None` when there is nothing to render
    pub fn window(&self, pad: u32) -> Option<(u64, u64)> {
        let state = self.state;
        let total = state.total_pages();
        if !state.is_active() || total == 1 {
            return None;
        }

        let pad = u64::from(pad);
        let current = state.current_page();
        let mut begin = current.saturating_sub(pad);
        let mut end = current.saturating_add(pad);
        if begin < 1 {
            begin = 1;
            end = pad * 2 + 1;
        }
        if end > total {
            end = total;
            begin = end.saturating_sub(pad * 2).max(1);
        }
        Some((begin, end))
    }

    /// Numbered links with `pad` neighbours on each side of the current page
    pub fn links(&self, pad: u32) -> String {
        let Some((begin, end)) = self.window(pad) else {
            return String::new();
        };
        let current = self.state.current_page();
        let total = self.state.total_pages();
        let p = &self.style.links;
        let link = p.link.as_deref();
        let dots = (&p.dots).none_if_empty();

        let mut links = Vec::new();
        if let Some(previous) = (&p.previous).none_if_empty() {
            if current > 1 {
                links.push(self.format(link, previous, Some(Href::Page(current - 1))));
            }
        }
        if let Some(dots) = dots {
            if begin > 1 {
                links.push(self.page(link, 1));
                if begin == 3 {
                    links.push(self.page(link, 2));
                } else if begin != 2 {
                    links.push(self.format(p.disabled.as_deref(), dots, None));
                }
            }
        }
        for num in begin..=end {
            if num == current {
                links.push(self.page(p.active.as_deref(), num));
            } else {
                links.push(self.page(link, num));
            }
        }
        if let Some(dots) = dots {
            if end < total {
                if end + 2 == total {
                    links.push(self.page(link, total - 1));
                } else if end + 1 != total {
                    links.push(self.format(p.disabled.as_deref(), dots, None));
                }
                links.push(self.page(link, total));
            }
        }
        if let Some(next) = (&p.next).none_if_empty() {
            if current < total {
                links.push(self.format(link, next, Some(Href::Page(current + 1))));
            }
        }

        let body = format!("\n\t{}", links.join("\n\t"));
        format!("\n{}\n", self.format(p.wrapper.as_deref(), &body, None))
    }

    /// [`links`](Self::links) with three neighbours on each side
    pub fn links_default(&self) -> String {
        self.links(DEFAULT_PAD)
    }
}

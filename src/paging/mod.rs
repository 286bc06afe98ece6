//! Cursor pagination for registry listings
//!
//! A listing response carries up to `n` items and, while items remain, a
//! `Link` header pointing at the next page:
//!
//! ```text
//! Link: <http://host/v2/_catalog?n=5&last=image5>; title="next page"; rel="next"; type="application/json"
//! ```
//!
//! The cursor (`last`) is the identifier of the final item served, so the
//! provider stays stateless across requests. [`plan_page`] computes one page
//! server-side; [`PageWalker`] follows links client-side until a response
//! arrives without one.

mod link;
mod provider;
mod walker;

pub use link::{cursor_of, format_link_header, next_page_url, parse_link_header};
pub use provider::{parse_page_size, plan_page, PagePlan, DEFAULT_PAGE_SIZE};
pub use walker::{CancelFlag, CatalogPage, ItemPage, PageWalker, TagPage};

#[cfg(test)]
mod tests;

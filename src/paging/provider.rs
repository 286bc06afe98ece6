//! Page provider: slices an ordered item set into one page per request
//!
//! The item set's order is the pagination sort order, and cursors are item
//! identifiers. Cursor validity is therefore coupled to item-set membership:
//! a cursor that names an item no longer (or never) in the set cannot anchor
//! a page and is rejected.

use crate::error::{Error, Result};

/// Page size used when a request carries no `n` parameter.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// One computed page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan<'a> {
    /// Items to serve, in item-set order.
    pub items: &'a [String],
    /// Page size to echo on the continuation link.
    pub size: usize,
    /// Cursor for the next page; `None` marks the terminal page.
    pub next_cursor: Option<&'a str>,
}

/// Parse the raw `n` query value into a page size.
///
/// An absent value means the default. A value that is not a positive integer
/// is rejected with [`Error::InvalidPageSize`] rather than silently replaced
/// or dropped.
pub fn parse_page_size(raw: Option<&str>, default: usize) -> Result<usize> {
    match raw {
        None => Ok(default),
        Some(value) => match value.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Error::invalid_page_size(value)),
        },
    }
}

/// Compute the single page answering `{cursor, size}` against `items`.
///
/// The cursor is the identifier of the last item already served, so the page
/// starts immediately after it; no cursor starts the page at the beginning.
/// A continuation cursor is attached iff items remain beyond this page.
///
/// A cursor equal to the final item yields an empty terminal page, which
/// ends a walk cleanly. A cursor not present in the set at all is an error.
pub fn plan_page<'a>(
    items: &'a [String],
    cursor: Option<&str>,
    size: usize,
) -> Result<PagePlan<'a>> {
    let start = match cursor {
        None => 0,
        Some(last) => {
            let found = items
                .iter()
                .position(|item| item == last)
                .ok_or_else(|| Error::invalid_cursor(last))?;
            found + 1
        }
    };

    // `size` comes straight off the wire and may be usize::MAX; saturate
    // instead of overflowing.
    let end = usize::min(start.saturating_add(size), items.len());
    let page = &items[start..end];

    let next_cursor = if start.saturating_add(size) < items.len() {
        page.last().map(String::as_str)
    } else {
        None
    };

    Ok(PagePlan {
        items: page,
        size,
        next_cursor,
    })
}

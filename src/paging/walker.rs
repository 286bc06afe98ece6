//! Page walker: follows continuation links until a listing is exhausted
//!
//! The walk is strictly sequential because each continuation URL comes out
//! of the previous response. A walk either returns the complete ordered list
//! or an error with no partial result; callers retry a failed walk from
//! scratch.

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::paging::link::{cursor_of, parse_link_header};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// A page body: a fixed field name mapping to the ordered page items.
pub trait ItemPage: DeserializeOwned {
    /// Consume the page, yielding its items in order.
    fn into_items(self) -> Vec<String>;
}

/// `{"Tags": [...]}` page body of a tag listing.
#[derive(Debug, Deserialize)]
pub struct TagPage {
    #[serde(rename = "Tags")]
    tags: Vec<String>,
}

impl ItemPage for TagPage {
    fn into_items(self) -> Vec<String> {
        self.tags
    }
}

/// `{"Repositories": [...]}` page body of the catalog.
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    #[serde(rename = "Repositories")]
    repositories: Vec<String>,
}

impl ItemPage for CatalogPage {
    fn into_items(self) -> Vec<String> {
        self.repositories
    }
}

/// Cooperative cancellation flag shared with a running walk.
///
/// Checked once per loop iteration, between page fetches; a cancelled walk
/// returns [`Error::WalkCancelled`] without issuing further requests.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a new, uncancelled flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the walk holding this flag
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Walks a paginated listing, reassembling the full ordered item set.
#[derive(Debug)]
pub struct PageWalker<'a> {
    client: &'a HttpClient,
    cancel: Option<CancelFlag>,
}

impl<'a> PageWalker<'a> {
    /// Create a walker over the given transport
    pub fn new(client: &'a HttpClient) -> Self {
        Self {
            client,
            cancel: None,
        }
    }

    /// Attach a cancellation flag, checked once per page
    #[must_use]
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Fetch every page of the listing at `path` and concatenate the items.
    ///
    /// The first request carries no cursor or size, accepting the provider's
    /// default. Each response's `Link` header (rel="next") names the next
    /// page; its absence terminates the walk. A continuation whose cursor
    /// was already followed aborts with [`Error::ProtocolLoop`] instead of
    /// looping forever.
    pub async fn walk<P: ItemPage>(&self, path: &str) -> Result<Vec<String>> {
        let mut items: Vec<String> = Vec::new();
        let mut seen_cursors: HashSet<String> = HashSet::new();
        let mut next_url = path.to_string();

        loop {
            if let Some(flag) = &self.cancel {
                if flag.is_cancelled() {
                    return Err(Error::WalkCancelled);
                }
            }

            let response = self.client.get(&next_url).await?;

            // The Link header must be read before the body consumes the response.
            let link = response
                .headers()
                .get("link")
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            let page: P = response.json().await.map_err(Error::Http)?;
            let page_items = page.into_items();
            debug!(
                "page of {} item(s) from {}, {} total",
                page_items.len(),
                next_url,
                items.len() + page_items.len()
            );
            items.extend(page_items);

            let Some(continuation) = link.as_deref().and_then(|h| parse_link_header(h, "next"))
            else {
                return Ok(items);
            };

            let cursor = cursor_of(&continuation)?
                .ok_or_else(|| Error::malformed_link(continuation.clone()))?;
            if !seen_cursors.insert(cursor.clone()) {
                return Err(Error::protocol_loop(cursor));
            }

            next_url = continuation;
        }
    }
}

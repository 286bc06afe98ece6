//! Registry listing client
//!
//! Thin caller-facing wrapper over the page walker. Construction verifies
//! the registry is reachable via the `/v2/` ping before any listing walk is
//! attempted; the listings themselves arrive fully depaginated.

use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::paging::{CancelFlag, CatalogPage, PageWalker, TagPage};

/// Client for a registry's listing endpoints.
#[derive(Debug)]
pub struct Registry {
    http: HttpClient,
}

impl Registry {
    /// Connect to a registry at `base_url` and verify it responds to the
    /// `/v2/` ping.
    pub async fn new(base_url: impl Into<String>) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(base_url).build();
        Self::with_http(HttpClient::with_config(config)).await
    }

    /// Connect over a caller-configured transport.
    pub async fn with_http(http: HttpClient) -> Result<Self> {
        http.get("/v2/").await?;
        Ok(Self { http })
    }

    /// All tags of a repository, in registry order, with pagination folded
    /// away.
    pub async fn tags(&self, repository: &str) -> Result<Vec<String>> {
        PageWalker::new(&self.http)
            .walk::<TagPage>(&format!("/v2/{repository}/tags/list"))
            .await
    }

    /// All tags of a repository, abortable between page fetches.
    pub async fn tags_with_cancel(
        &self,
        repository: &str,
        cancel: CancelFlag,
    ) -> Result<Vec<String>> {
        PageWalker::new(&self.http)
            .with_cancel(cancel)
            .walk::<TagPage>(&format!("/v2/{repository}/tags/list"))
            .await
    }

    /// The full repository catalog, with pagination folded away.
    pub async fn repositories(&self) -> Result<Vec<String>> {
        PageWalker::new(&self.http)
            .walk::<CatalogPage>("/v2/_catalog")
            .await
    }
}

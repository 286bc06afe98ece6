//! Registry listing server
//!
//! The page provider's HTTP surface: an axum router over an immutable
//! [`ListingStore`]. Every request is answered from the store without
//! provider-side cursor state, so the router is safe under any number of
//! concurrent walks.
//!
//! Routes:
//! - `GET /v2/` — reachability ping
//! - `GET /v2/_catalog` — repository catalog, paged
//! - `GET /v2/<name>/tags/list` — tags of one repository, paged

use crate::error::Error;
use crate::paging::{format_link_header, next_page_url, parse_page_size, plan_page, DEFAULT_PAGE_SIZE};
use axum::extract::{Host, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Ordered item sets served by the provider.
///
/// Immutable once built: listings must not change for the duration of any
/// walk, and the provider never mutates them.
#[derive(Debug)]
pub struct ListingStore {
    repositories: Vec<String>,
    tags: HashMap<String, Vec<String>>,
    default_page_size: usize,
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingStore {
    /// Create an empty store with the standard default page size
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
            tags: HashMap::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size used when a request carries no `n`.
    /// Must be at least 1.
    #[must_use]
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "default page size must be positive");
        self.default_page_size = size;
        self
    }

    /// Add a repository and its ordered tag list. Catalog order is the
    /// order repositories were added.
    #[must_use]
    pub fn add_repository(mut self, name: impl Into<String>, tags: Vec<String>) -> Self {
        let name = name.into();
        self.repositories.push(name.clone());
        self.tags.insert(name, tags);
        self
    }

    /// Build the listing router over this store
    pub fn into_router(self) -> Router {
        router(Arc::new(self))
    }
}

/// Build the listing router over a shared store
pub fn router(store: Arc<ListingStore>) -> Router {
    Router::new()
        .route("/v2/", get(ping))
        .route("/v2/_catalog", get(catalog))
        // Repository names may contain slashes, so tag listing is matched
        // by suffix under a wildcard.
        .route("/v2/*rest", get(tags))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Query half of a page request. `n` stays raw text so a malformed value is
/// rejected with an explicit error instead of being coerced or dropped.
#[derive(Debug, Deserialize)]
struct ListQuery {
    n: Option<String>,
    last: Option<String>,
}

async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn catalog(
    State(store): State<Arc<ListingStore>>,
    Host(host): Host,
    Query(query): Query<ListQuery>,
) -> Response {
    paged_response(&store, &host, "/v2/_catalog", &store.repositories, &query, "Repositories")
}

async fn tags(
    State(store): State<Arc<ListingStore>>,
    Host(host): Host,
    Path(rest): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response {
    let Some(name) = rest.strip_suffix("/tags/list") else {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    };

    match store.tags.get(name) {
        Some(items) => {
            paged_response(&store, &host, &format!("/v2/{rest}"), items, &query, "Tags")
        }
        None => (StatusCode::NOT_FOUND, "repository not known").into_response(),
    }
}

/// Serve one page of `items`, attaching a continuation `Link` header while
/// items remain beyond it.
fn paged_response(
    store: &ListingStore,
    host: &str,
    path: &str,
    items: &[String],
    query: &ListQuery,
    field: &str,
) -> Response {
    // Empty query values (`?n=`, `?last=`) mean absent on the wire.
    let size = match parse_page_size(none_if_empty(query.n.as_deref()), store.default_page_size) {
        Ok(size) => size,
        Err(err) => return bad_request(&err),
    };

    let plan = match plan_page(items, none_if_empty(query.last.as_deref()), size) {
        Ok(plan) => plan,
        Err(err) => return bad_request(&err),
    };

    let mut page = serde_json::Map::new();
    page.insert(field.to_string(), json!(plan.items));
    let body = Json(serde_json::Value::Object(page));

    match plan.next_cursor {
        Some(last) => match next_page_url(host, path, plan.size, last) {
            Ok(next) => {
                ([(header::LINK, format_link_header(&next))], body).into_response()
            }
            Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
        },
        None => body.into_response(),
    }
}

fn none_if_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Client errors surface as 400 with a plain-text body.
fn bad_request(err: &Error) -> Response {
    (StatusCode::BAD_REQUEST, err.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ListingStore {
        ListingStore::new()
            .with_default_page_size(5)
            .add_repository("example.com/image", vec!["v1".to_string(), "v2".to_string()])
    }

    #[test]
    fn test_store_preserves_catalog_order() {
        let store = ListingStore::new()
            .add_repository("b/second", vec![])
            .add_repository("a/first", vec![]);

        assert_eq!(store.repositories, vec!["b/second", "a/first"]);
    }

    #[test]
    fn test_store_default_page_size() {
        assert_eq!(ListingStore::new().default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(store().default_page_size, 5);
    }

    #[test]
    #[should_panic(expected = "default page size must be positive")]
    fn test_store_rejects_zero_page_size() {
        let _ = ListingStore::new().with_default_page_size(0);
    }

    #[test]
    fn test_none_if_empty() {
        assert_eq!(none_if_empty(Some("tag5")), Some("tag5"));
        assert_eq!(none_if_empty(Some("")), None);
        assert_eq!(none_if_empty(None), None);
    }
}

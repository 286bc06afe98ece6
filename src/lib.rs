//! # docklist
//!
//! Paginated tag and catalog listing for Docker/OCI-style registries.
//!
//! A registry serves listings (`/v2/<name>/tags/list`, `/v2/_catalog`) one
//! page at a time, signalling continuation through an RFC 5988 `Link`
//! header. This crate implements both halves of that protocol:
//!
//! - **Provider** ([`server`], [`paging::plan_page`]): slices an ordered,
//!   immutable item set into pages and attaches a continuation link while
//!   items remain. Cursors are self-describing item identifiers, not opaque
//!   tokens, so the provider keeps no per-request state.
//! - **Walker** ([`paging::PageWalker`], [`Registry`]): fetches pages and
//!   follows continuation links until none is advertised, returning one
//!   concatenated ordered list. The caller never sees page boundaries.
//!
//! ```rust,ignore
//! use docklist::{Registry, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let hub = Registry::new("http://localhost:5000").await?;
//!     let tags = hub.tags("example.com/image").await?;
//!     let repos = hub.repositories().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the crate
pub mod error;

/// HTTP transport with retry and backoff
pub mod http;

/// Pagination protocol: page computation, continuation links, page walking
pub mod paging;

/// Registry listing client
pub mod registry;

/// Registry listing server (the provider's HTTP surface)
pub mod server;

pub use error::{Error, Result};
pub use registry::Registry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

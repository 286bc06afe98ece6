//! HTTP transport module
//!
//! Provides the GET transport the page walker runs on, with retry and
//! backoff. Retry policy lives entirely here: the walker aborts on the first
//! error the transport surfaces and never retries pages itself.

mod client;

pub use client::{BackoffType, HttpClient, HttpClientConfig, HttpClientConfigBuilder};

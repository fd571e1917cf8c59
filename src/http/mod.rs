//! HTTP client construction.
//!
//! The media transfers go through a reqwest client wrapped with tracing
//! and transport-level retry middleware. Transport retries cover flaky
//! individual requests and are independent of the playlist-resolution
//! retry loop in [`crate::session`].

pub mod client;

pub use client::{create_http_client, HttpClientConfig};

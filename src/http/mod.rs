//! HTTP transport for the catalog service.
//!
//! [`ApiClient`] is the only place requests are made. The higher-level
//! iteration types borrow a client and stay out of the transport business:
//! retries, backoff, and timeouts are all handled here, configured through
//! [`ApiClientConfig`].

mod client;

pub use client::{
    ApiClient, ApiClientConfig, ApiClientConfigBuilder, HttpResponse, DEFAULT_BASE_URL,
};

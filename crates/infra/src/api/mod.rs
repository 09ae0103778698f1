//! Typed client for the date log HTTP API
//!
//! # Architecture
//!
//! - Uses the shared [`HttpClient`](crate::http::HttpClient) (no direct
//!   reqwest)
//! - Bearer token supplied per request by an [`AccessTokenProvider`]
//! - `{error}` responses mapped back to `DateLogError`

pub mod auth;
pub mod client;
pub mod errors;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use client::{DateLogClient, DateLogClientBuilder, DateLogClientConfig};
pub use errors::{map_status_error, ErrorBody};

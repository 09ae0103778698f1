//! # Date Logger Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Supabase adapters (auth verification, PostgREST record store)
//! - In-memory adapters for development and tests
//! - HTTP client with a request timeout
//! - Configuration loading
//! - A typed client for the date log HTTP API
//!
//! ## Architecture
//! - Implements traits defined in `datelog-core`
//! - Contains all "impure" code (network I/O, environment, files)

pub mod api;
pub mod backend;
pub mod config;
pub mod errors;
pub mod http;
pub mod memory;
pub mod supabase;

// Re-export commonly used items
pub use api::{AccessTokenProvider, DateLogClient, DateLogClientConfig, StaticTokenProvider};
pub use backend::Backend;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use memory::{MemoryStoreFactory, StaticTokenVerifier};
pub use supabase::{PostgrestStoreFactory, SupabaseIdentityVerifier, SupabaseProject};

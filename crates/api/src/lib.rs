//! # Date Logger API
//!
//! HTTP application layer - routes, authentication gate and entry point.
//!
//! This crate contains:
//! - Route handlers for the date record endpoints
//! - Application context (dependency injection)
//! - Router assembly and the serve loop
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves JSON over HTTP with axum

pub mod commands;
pub mod context;
pub mod errors;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use context::{AppContext, AuthenticatedService};
pub use errors::ApiError;
pub use server::{bind, build_router, serve};

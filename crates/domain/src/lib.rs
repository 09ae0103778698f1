//! # Date Logger Domain
//!
//! Business domain types and models for Date Logger.
//!
//! This crate contains:
//! - The date record entity and its request/patch shapes
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Calendar-date normalization rules
//!
//! ## Architecture
//! - No dependencies on other Date Logger crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::date_parser::{format_calendar_date, normalize_date, parse_calendar_date};

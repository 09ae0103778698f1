//! # Date Logger Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for identity and storage
//! - The date record use cases
//! - The interval aggregator and the client-side state container
//!
//! ## Architecture Principles
//! - Only depends on `datelog-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod records;
pub mod state;
pub mod stats;

pub use records::ports::{DateRecordStore, IdentityVerifier, ScopedStoreFactory};
pub use records::DateRecordService;
pub use state::{RecordMutation, RecordState};
pub use stats::{average_interval_days, summarize_dates, summarize_intervals};

//! Derived statistics over a caller's records
//!
//! Everything in here is pure: no I/O, no shared state.

pub mod interval;

pub use interval::{average_interval_days, summarize_dates, summarize_intervals};

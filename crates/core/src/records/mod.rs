//! Date record use cases and their ports

pub mod ports;
pub mod service;

pub use service::{build_patch, DateRecordService};

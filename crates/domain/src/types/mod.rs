//! Domain types and models

pub mod identity;
pub mod record;
pub mod stats;

pub use identity::{BearerToken, Identity, Session, UserId};
pub use record::{
    CreateDateRecord, DateRecord, DateRecordPatch, DeleteConfirmation, NewDateRecord, RecordId,
    UpdateDateRecord,
};
pub use stats::IntervalSummary;

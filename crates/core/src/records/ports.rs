//! Port interfaces for identity verification and record storage
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use datelog_domain::{
    BearerToken, DateRecord, DateRecordPatch, Identity, NewDateRecord, RecordId, Result, Session,
};

/// Resolves a bearer credential to a verified identity.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a token.
    ///
    /// Returns `DateLogError::Unauthorized` when the token is rejected or no
    /// identity is attached to it.
    async fn verify(&self, token: &BearerToken) -> Result<Identity>;
}

/// Storage handle confined to one identity's rows.
///
/// Ownership is enforced by the collaborator behind the handle, not by the
/// caller. Each method is a single atomic call against storage.
#[async_trait]
pub trait DateRecordStore: Send + Sync {
    /// All visible records, ordered by `date` ascending.
    async fn list(&self) -> Result<Vec<DateRecord>>;

    /// Fetch one visible record.
    async fn find(&self, id: &RecordId) -> Result<Option<DateRecord>>;

    /// Insert a validated record and return it as stored.
    async fn insert(&self, record: NewDateRecord) -> Result<DateRecord>;

    /// Apply a patch to the visible row with `id`; `None` when no row matched.
    async fn update(&self, id: &RecordId, patch: &DateRecordPatch) -> Result<Option<DateRecord>>;

    /// Delete the visible row with `id`, returning the affected row count.
    async fn delete(&self, id: &RecordId) -> Result<u64>;
}

/// Builds a fresh storage handle for one request.
///
/// Handles are never cached or shared across requests or identities.
pub trait ScopedStoreFactory: Send + Sync {
    /// Open a handle that sees only `session`'s rows.
    fn scoped(&self, session: &Session) -> Result<Box<dyn DateRecordStore>>;
}

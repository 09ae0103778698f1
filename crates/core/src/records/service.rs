//! Date record service - core business logic
//!
//! One service instance serves one request: it owns the scoped storage handle
//! built for the caller's session and drops it with the request.

use datelog_domain::constants::{MSG_DATE_REQUIRED, MSG_RECORD_DELETED, MSG_RECORD_NOT_FOUND};
use datelog_domain::{
    normalize_date, CreateDateRecord, DateLogError, DateRecord, DateRecordPatch,
    DeleteConfirmation, Identity, NewDateRecord, RecordId, Result, Session, UpdateDateRecord,
};
use tracing::{debug, warn};

use super::ports::{DateRecordStore, ScopedStoreFactory};

/// Date record use cases for a single authenticated caller
pub struct DateRecordService {
    store: Box<dyn DateRecordStore>,
    caller: Identity,
}

impl DateRecordService {
    /// Create a service over an already scoped store
    pub fn new(store: Box<dyn DateRecordStore>, caller: Identity) -> Self {
        Self { store, caller }
    }

    /// Build a fresh scoped handle for `session` and wrap it
    pub fn for_session(factory: &dyn ScopedStoreFactory, session: &Session) -> Result<Self> {
        let store = factory.scoped(session)?;
        Ok(Self::new(store, session.identity.clone()))
    }

    /// Identity every operation is performed for
    pub fn caller(&self) -> &Identity {
        &self.caller
    }

    /// List the caller's records, ordered by date ascending
    pub async fn list(&self) -> Result<Vec<DateRecord>> {
        let records = self.store.list().await?;
        debug!(user_id = %self.caller.user_id, count = records.len(), "listed date records");
        Ok(records)
    }

    /// Validate, normalize and insert a record owned by the caller
    ///
    /// Missing or malformed dates are rejected before the store is touched.
    /// An empty note is stored as no note.
    pub async fn create(&self, input: CreateDateRecord) -> Result<DateRecord> {
        let raw_date = input
            .date
            .as_deref()
            .ok_or_else(|| DateLogError::Validation(MSG_DATE_REQUIRED.to_string()))?;
        let date = normalize_date(raw_date)?;

        let record = NewDateRecord {
            owner_id: self.caller.user_id.clone(),
            date,
            note: input.note.filter(|note| !note.is_empty()),
        };

        let created = self.store.insert(record).await?;
        self.check_owner(&created, "create");
        Ok(created)
    }

    /// Apply a partial update to one of the caller's records
    ///
    /// An empty patch performs no write and returns the current row.
    pub async fn update(&self, id: &RecordId, input: UpdateDateRecord) -> Result<DateRecord> {
        let patch = build_patch(input)?;

        let updated = if patch.is_empty() {
            debug!(record_id = %id, "empty patch, reading current row");
            self.store.find(id).await?
        } else {
            self.store.update(id, &patch).await?
        };

        let record = updated.ok_or_else(not_found)?;
        self.check_owner(&record, "update");
        Ok(record)
    }

    /// Delete one of the caller's records
    pub async fn delete(&self, id: &RecordId) -> Result<DeleteConfirmation> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(not_found());
        }

        debug!(record_id = %id, affected, "deleted date record");
        Ok(DeleteConfirmation { message: MSG_RECORD_DELETED.to_string() })
    }

    // Storage policy is the authority on ownership; a mismatch here is only
    // reported.
    fn check_owner(&self, record: &DateRecord, operation: &'static str) {
        if record.owner_id != self.caller.user_id {
            warn!(
                operation,
                record_id = %record.id,
                caller = %self.caller.user_id,
                owner = %record.owner_id,
                "store returned a record owned by another identity"
            );
        }
    }
}

/// Translate an update body into a storage patch
///
/// `date` that is absent, `null` or blank leaves the stored date unchanged;
/// any other value must normalize. `note` is forwarded as-is, so an explicit
/// empty string or `null` overwrites the stored note.
pub fn build_patch(input: UpdateDateRecord) -> Result<DateRecordPatch> {
    let date = match input.date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(normalize_date(raw)?),
    };

    Ok(DateRecordPatch { date, note: input.note })
}

fn not_found() -> DateLogError {
    DateLogError::NotFound(MSG_RECORD_NOT_FOUND.to_string())
}

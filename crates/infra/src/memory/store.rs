//! In-process date record store
//!
//! Stands in for the row-level-security table during local development and
//! tests: each handle only sees and changes rows owned by its session's
//! identity. Each call takes the lock once, so each call is atomic.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use datelog_core::{DateRecordStore, ScopedStoreFactory};
use datelog_domain::{
    format_calendar_date, DateLogError, DateRecord, DateRecordPatch, NewDateRecord, RecordId,
    Result, Session, UserId,
};
use parking_lot::RwLock;
use uuid::Uuid;

type Rows = Arc<RwLock<Vec<DateRecord>>>;

/// Shared table; hands out identity-scoped handles.
#[derive(Clone, Default)]
pub struct MemoryStoreFactory {
    rows: Rows,
}

impl MemoryStoreFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows across all owners.
    pub fn total_rows(&self) -> usize {
        self.rows.read().len()
    }
}

impl ScopedStoreFactory for MemoryStoreFactory {
    fn scoped(&self, session: &Session) -> Result<Box<dyn DateRecordStore>> {
        Ok(Box::new(MemoryDateStore {
            rows: Arc::clone(&self.rows),
            owner: session.user_id().clone(),
        }))
    }
}

pub struct MemoryDateStore {
    rows: Rows,
    owner: UserId,
}

impl MemoryDateStore {
    fn visible(&self, row: &DateRecord) -> bool {
        row.owner_id == self.owner
    }
}

#[async_trait]
impl DateRecordStore for MemoryDateStore {
    async fn list(&self) -> Result<Vec<DateRecord>> {
        let mut rows: Vec<DateRecord> =
            self.rows.read().iter().filter(|row| self.visible(row)).cloned().collect();
        // stable: same-day rows keep insertion order
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    async fn find(&self, id: &RecordId) -> Result<Option<DateRecord>> {
        Ok(self.rows.read().iter().find(|row| &row.id == id && self.visible(row)).cloned())
    }

    async fn insert(&self, record: NewDateRecord) -> Result<DateRecord> {
        if record.owner_id != self.owner {
            return Err(DateLogError::Storage(
                "new row violates row-level security policy for table \"dates\"".into(),
            ));
        }

        let row = DateRecord {
            id: RecordId::new(Uuid::new_v4().to_string()),
            owner_id: record.owner_id,
            date: format_calendar_date(record.date),
            note: record.note,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.rows.write().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &RecordId, patch: &DateRecordPatch) -> Result<Option<DateRecord>> {
        let mut rows = self.rows.write();
        let Some(row) = rows.iter_mut().find(|row| &row.id == id && row.owner_id == self.owner)
        else {
            return Ok(None);
        };

        if let Some(date) = patch.date {
            row.date = format_calendar_date(date);
        }
        if let Some(note) = &patch.note {
            row.note.clone_from(note);
        }
        row.updated_at = Some(Utc::now());
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: &RecordId) -> Result<u64> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|row| !(&row.id == id && row.owner_id == self.owner));
        Ok((before - rows.len()) as u64)
    }
}

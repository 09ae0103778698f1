//! Mock repository implementations for testing
//!
//! Provides an in-memory mock of the scoped store port that records every
//! call, enabling deterministic service tests without an HTTP collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use datelog_core::DateRecordStore;
use datelog_domain::{
    format_calendar_date, DateLogError, DateRecord, DateRecordPatch, NewDateRecord, RecordId,
    Result as DomainResult, UserId,
};
use parking_lot::Mutex;

/// Rows shared by every handle created from the same table.
#[derive(Default, Clone)]
pub struct SharedTable {
    rows: Arc<Mutex<Vec<DateRecord>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    next_id: Arc<Mutex<u64>>,
}

impl SharedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that only sees rows owned by `user`.
    pub fn scoped(&self, user: &str) -> MockDateRecordStore {
        MockDateRecordStore { table: self.clone(), owner: UserId::new(user), fail_with: None }
    }

    /// Every store method invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn rows(&self) -> Vec<DateRecord> {
        self.rows.lock().clone()
    }
}

/// In-memory mock for `DateRecordStore` enforcing ownership per handle.
#[derive(Clone)]
pub struct MockDateRecordStore {
    table: SharedTable,
    owner: UserId,
    fail_with: Option<DateLogError>,
}

impl MockDateRecordStore {
    /// Make every call fail with `error` after it has been recorded.
    pub fn failing(mut self, error: DateLogError) -> Self {
        self.fail_with = Some(error);
        self
    }

    fn enter(&self, call: &'static str) -> DomainResult<()> {
        self.table.calls.lock().push(call);
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DateRecordStore for MockDateRecordStore {
    async fn list(&self) -> DomainResult<Vec<DateRecord>> {
        self.enter("list")?;
        let mut rows: Vec<DateRecord> = self
            .table
            .rows
            .lock()
            .iter()
            .filter(|row| row.owner_id == self.owner)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    async fn find(&self, id: &RecordId) -> DomainResult<Option<DateRecord>> {
        self.enter("find")?;
        Ok(self
            .table
            .rows
            .lock()
            .iter()
            .find(|row| &row.id == id && row.owner_id == self.owner)
            .cloned())
    }

    async fn insert(&self, record: NewDateRecord) -> DomainResult<DateRecord> {
        self.enter("insert")?;
        if record.owner_id != self.owner {
            return Err(DateLogError::Storage("row-level security violation".into()));
        }

        let id = {
            let mut next = self.table.next_id.lock();
            *next += 1;
            RecordId::new(format!("rec-{next}"))
        };
        let row = DateRecord {
            id,
            owner_id: record.owner_id,
            date: format_calendar_date(record.date),
            note: record.note,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.table.rows.lock().push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: &DateRecordPatch,
    ) -> DomainResult<Option<DateRecord>> {
        self.enter("update")?;
        let mut rows = self.table.rows.lock();
        let Some(row) = rows.iter_mut().find(|row| &row.id == id && row.owner_id == self.owner)
        else {
            return Ok(None);
        };

        if let Some(date) = patch.date {
            row.date = format_calendar_date(date);
        }
        if let Some(note) = &patch.note {
            row.note = note.clone();
        }
        row.updated_at = Some(Utc::now());
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: &RecordId) -> DomainResult<u64> {
        self.enter("delete")?;
        let mut rows = self.table.rows.lock();
        let before = rows.len();
        rows.retain(|row| !(&row.id == id && row.owner_id == self.owner));
        Ok((before - rows.len()) as u64)
    }
}

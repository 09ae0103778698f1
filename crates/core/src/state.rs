//! Client-side record collection with its derived interval statistic
//!
//! The container has exactly two update paths: replace the whole collection
//! (after a list refresh) and apply one mutation (after a successful create,
//! update or delete). Both recompute the interval summary before returning.
//! It is passed explicitly to whoever renders it; there is no global instance.

use chrono::NaiveDate;
use datelog_domain::{DateRecord, IntervalSummary, RecordId};

use crate::stats::summarize_intervals;

/// A single confirmed change to apply to the local collection
#[derive(Debug, Clone, PartialEq)]
pub enum RecordMutation {
    Inserted(DateRecord),
    Updated(DateRecord),
    Deleted(RecordId),
}

/// Records of the active identity plus their interval summary
#[derive(Debug, Clone, Default)]
pub struct RecordState {
    records: Vec<DateRecord>,
    summary: IntervalSummary,
}

impl RecordState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<DateRecord>) -> Self {
        let mut state = Self::new();
        state.replace_all(records);
        state
    }

    /// Replace the collection with a fresh list from storage
    pub fn replace_all(&mut self, records: Vec<DateRecord>) {
        self.records = records;
        self.recompute();
    }

    /// Apply one confirmed mutation
    ///
    /// Inserts and updates replace any record with the same id, so applying
    /// the same mutation twice leaves the collection unchanged.
    pub fn apply(&mut self, mutation: RecordMutation) {
        match mutation {
            RecordMutation::Inserted(record) | RecordMutation::Updated(record) => {
                self.upsert(record);
            }
            RecordMutation::Deleted(id) => {
                self.records.retain(|record| record.id != id);
            }
        }
        self.recompute();
    }

    pub fn records(&self) -> &[DateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> &IntervalSummary {
        &self.summary
    }

    pub fn average_interval_days(&self) -> Option<f64> {
        self.summary.average_days
    }

    pub fn get(&self, id: &RecordId) -> Option<&DateRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// First record on `date`; the collection may hold several.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&DateRecord> {
        self.records.iter().find(|record| record.calendar_date() == Some(date))
    }

    fn upsert(&mut self, record: DateRecord) {
        match self.records.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    fn recompute(&mut self) {
        self.summary = summarize_intervals(&self.records);
    }
}

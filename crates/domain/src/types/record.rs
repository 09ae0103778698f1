//! Date record types
//!
//! `DateRecord` is the sole persisted entity. The request shapes
//! (`CreateDateRecord`, `UpdateDateRecord`) are what clients send; the storage
//! shapes (`NewDateRecord`, `DateRecordPatch`) are what reaches the store after
//! validation and normalization.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::identity::UserId;
use crate::utils::date_parser::parse_calendar_date;

/// Store-assigned record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a raw identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar date marked by a user, with an optional note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: RecordId,
    #[serde(rename = "user_id")]
    pub owner_id: UserId,
    /// Calendar date as stored (`YYYY-MM-DD`).
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DateRecord {
    /// Note for display; absent and empty notes both render as `""`.
    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }

    /// Parsed calendar date, `None` when the stored value is malformed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDateRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateDateRecord {
    /// Request for `date` without a note.
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: Some(date.into()), note: None }
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Body of an update request.
///
/// `note` distinguishes "absent" (`None`, leave unchanged) from an explicit
/// value (`Some(None)` for `null`, `Some(Some(_))` for a string, including
/// the empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub note: Option<Option<String>>,
}

impl UpdateDateRecord {
    /// Patch that sets only the note.
    pub fn note(note: impl Into<String>) -> Self {
        Self { date: None, note: Some(Some(note.into())) }
    }

    /// Patch that sets only the date.
    pub fn date(date: impl Into<String>) -> Self {
        Self { date: Some(date.into()), note: None }
    }
}

/// Validated insert, owner taken from the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDateRecord {
    #[serde(rename = "user_id")]
    pub owner_id: UserId,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Validated partial update; only provided fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Option<String>>,
}

impl DateRecordPatch {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.note.is_none()
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

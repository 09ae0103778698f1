//! Interval statistics types

use serde::{Deserialize, Serialize};

/// Result of the interval aggregation over one identity's records.
///
/// `average_days` is `None` when fewer than two valid dates exist, which is
/// distinct from `Some(0.0)` (all dates identical).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalSummary {
    /// Number of records whose date parsed successfully
    pub valid_dates: usize,

    /// Day gaps between temporally adjacent dates, in sorted order
    pub gaps: Vec<i64>,

    /// Mean gap rounded to one decimal place
    pub average_days: Option<f64>,
}

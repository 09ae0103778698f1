//! Average interval between recorded dates
//!
//! Records whose date fails to parse are dropped. With fewer than two valid
//! dates the average is undefined (`None`), which callers must keep distinct
//! from `Some(0.0)`.

use chrono::NaiveDate;
use datelog_domain::{DateRecord, IntervalSummary};

/// Summarize the day gaps between a caller's records.
pub fn summarize_intervals(records: &[DateRecord]) -> IntervalSummary {
    summarize_dates(records.iter().filter_map(DateRecord::calendar_date))
}

/// Mean gap in days, rounded to one decimal place.
pub fn average_interval_days(records: &[DateRecord]) -> Option<f64> {
    summarize_intervals(records).average_days
}

/// Summarize an arbitrary set of calendar dates (order does not matter).
pub fn summarize_dates<I>(dates: I) -> IntervalSummary
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    dates.sort_unstable();

    let gaps: Vec<i64> =
        dates.windows(2).map(|pair| (pair[1] - pair[0]).num_days()).collect();

    let average_days = if gaps.is_empty() {
        None
    } else {
        let total: i64 = gaps.iter().sum();
        Some(round_one_decimal(total as f64 / gaps.len() as f64))
    };

    IntervalSummary { valid_dates: dates.len(), gaps, average_days }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use datelog_domain::{RecordId, UserId};

    use super::*;

    fn record(date: &str) -> DateRecord {
        DateRecord {
            id: RecordId::new(format!("id-{date}")),
            owner_id: UserId::new("user-1"),
            date: date.to_string(),
            note: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn records(dates: &[&str]) -> Vec<DateRecord> {
        dates.iter().map(|date| record(date)).collect()
    }

    #[test]
    fn averages_gaps_between_adjacent_dates() {
        let summary = summarize_intervals(&records(&["2024-01-01", "2024-01-03", "2024-01-10"]));
        assert_eq!(summary.gaps, vec![2, 7]);
        assert_eq!(summary.average_days, Some(4.5));
        assert_eq!(summary.valid_dates, 3);
    }

    #[test]
    fn input_order_does_not_matter() {
        let avg = average_interval_days(&records(&["2024-01-10", "2024-01-01", "2024-01-03"]));
        assert_eq!(avg, Some(4.5));
    }

    #[test]
    fn zero_or_one_date_is_undefined() {
        assert_eq!(average_interval_days(&[]), None);
        assert_eq!(average_interval_days(&records(&["2024-01-05"])), None);
    }

    #[test]
    fn duplicate_dates_average_to_zero() {
        let avg = average_interval_days(&records(&["2024-01-05", "2024-01-05"]));
        assert_eq!(avg, Some(0.0));
    }

    #[test]
    fn malformed_dates_are_discarded() {
        let summary = summarize_intervals(&records(&["garbage", "2024-01-05", "2024-99-01"]));
        assert_eq!(summary.valid_dates, 1);
        assert_eq!(summary.average_days, None);

        let avg = average_interval_days(&records(&["2024-01-01", "nope", "2024-01-04"]));
        assert_eq!(avg, Some(3.0));
    }

    #[test]
    fn rounds_to_one_decimal_place() {
        // gaps 1, 1, 2 → 1.333…
        let avg = average_interval_days(&records(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-05",
        ]));
        assert_eq!(avg, Some(1.3));

        // gaps 1, 2, 2 → 1.666…
        let avg = average_interval_days(&records(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-04",
            "2024-01-06",
        ]));
        assert_eq!(avg, Some(1.7));
    }

    #[test]
    fn spans_month_and_leap_day_boundaries() {
        let avg = average_interval_days(&records(&["2024-02-28", "2024-03-01"]));
        assert_eq!(avg, Some(2.0));
    }
}

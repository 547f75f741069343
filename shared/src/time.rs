//! Timestamp helpers shared by the ledgers and the reconciliation engine

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Milliseconds for a ledger record dated `date` at `time`
///
/// This is the stored `timestamp_ms` convention: the recorded wall-clock
/// date and time interpreted as UTC. "Latest" queries compare these
/// values, never insertion order.
pub fn timestamp_ms(date: NaiveDate, time: NaiveTime) -> i64 {
    NaiveDateTime::new(date, time).and_utc().timestamp_millis()
}

/// Milliseconds for midnight of `date`
///
/// Date-range filters compare entries at midnight of their date against
/// full-precision bounds.
pub fn midnight_ms(date: NaiveDate) -> i64 {
    timestamp_ms(date, NaiveTime::MIN)
}

/// Whole days from `date` to `today`, floored at zero
pub fn age_in_days(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_days().max(0)
}

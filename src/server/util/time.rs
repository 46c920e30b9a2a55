//! Date helpers.
//!
//! Maintenance is tracked at calendar-date granularity, so "today" is always the UTC date.

use chrono::{NaiveDate, NaiveDateTime, Utc};

/// The current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The current UTC timestamp without timezone, as stored in `created_at`/`updated_at`.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

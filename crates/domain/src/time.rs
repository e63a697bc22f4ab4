//! Time and date helpers.
//!
//! All calendar comparisons are made in UTC.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return the current UTC calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    now().date_naive()
}

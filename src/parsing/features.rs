//! Calendar and time-of-day features derived from a timestamp.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Fields derived from a message timestamp.
///
/// These are the keys downstream aggregates such as hourly activity maps
/// group by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFeatures {
    pub date_only: NaiveDate,
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    pub day_of_month: u32,
    pub weekday_name: String,
    pub hour: u32,
    pub minute: u32,
    pub am_pm: String,
    pub period_bucket: String,
}

impl TimeFeatures {
    /// Derives every feature from `timestamp`.
    pub fn derive(timestamp: &NaiveDateTime) -> Self {
        Self {
            date_only: timestamp.date(),
            year: timestamp.year(),
            month_number: timestamp.month(),
            month_name: timestamp.format("%B").to_string(),
            day_of_month: timestamp.day(),
            weekday_name: timestamp.format("%A").to_string(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            am_pm: timestamp.format("%p").to_string(),
            period_bucket: period_bucket(timestamp.hour()),
        }
    }
}

/// Labels the one-hour slot starting at `hour` (0-23).
///
/// Hours outside 0-23 wrap around the clock.
///
/// # Example
///
/// ```rust
/// use chatscope::parsing::period_bucket;
///
/// assert_eq!(period_bucket(0), "12AM-1AM");
/// assert_eq!(period_bucket(10), "10AM-11AM");
/// assert_eq!(period_bucket(14), "2PM-3PM");
/// assert_eq!(period_bucket(23), "11PM-12AM");
/// ```
pub fn period_bucket(hour: u32) -> String {
    let hour = hour % 24;
    match hour {
        0 => "12AM-1AM".to_string(),
        11 => "11AM-12PM".to_string(),
        12 => "12PM-1PM".to_string(),
        23 => "11PM-12AM".to_string(),
        h if h < 11 => format!("{}AM-{}AM", h, h + 1),
        h => format!("{}PM-{}PM", h - 12, h - 11),
    }
}

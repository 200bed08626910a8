//! The structured message record produced by the parser.
//!
//! A [`MessageRecord`] is one chat message with its author, text and
//! timestamp, plus the calendar fields downstream analysis groups by.
//!
//! # Examples
//!
//! ```
//! use chatscope::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap().and_hms_opt(10, 15, 0).unwrap();
//! let record = MessageRecord::new(ts, "Alice", "Good morning!");
//!
//! assert_eq!(record.sender, "Alice");
//! assert_eq!(record.hour, 10);
//! assert_eq!(record.period_bucket, "10AM-11AM");
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::parsing::{SYSTEM_SENDER, TimeFeatures};

/// Placeholder exports write in place of an attachment.
const MEDIA_OMITTED: &str = "<Media omitted>";

/// One parsed chat message.
///
/// # Fields
///
/// | Column | Type | Description |
/// |--------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Wall-clock send time as written in the export |
/// | `sender` | `String` | Display name, or `group_notification` |
/// | `body` | `String` | Message text, trimmed |
/// | `date_only` | `NaiveDate` | Calendar date |
/// | `year` | `i32` | Year |
/// | `month_number` | `u32` | Month, 1-12 |
/// | `month_name` | `String` | `"January"` ... `"December"` |
/// | `day_of_month` | `u32` | Day, 1-31 |
/// | `weekday_name` | `String` | `"Monday"` ... `"Sunday"` |
/// | `hour` | `u32` | Hour, 0-23 |
/// | `minute` | `u32` | Minute, 0-59 |
/// | `am_pm` | `String` | `"AM"` or `"PM"` |
/// | `period_bucket` | `String` | One-hour slot label such as `"2PM-3PM"` |
///
/// Timestamps carry no zone: exports record the sender's local clock and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub body: String,
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

impl MessageRecord {
    /// Column names, in table order.
    pub const COLUMNS: [&'static str; 13] = [
        "timestamp",
        "sender",
        "body",
        "date_only",
        "year",
        "month_number",
        "month_name",
        "day_of_month",
        "weekday_name",
        "hour",
        "minute",
        "am_pm",
        "period_bucket",
    ];

    /// Creates a record and derives its time features from `timestamp`.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        let TimeFeatures {
            date_only,
            year,
            month_number,
            month_name,
            day_of_month,
            weekday_name,
            hour,
            minute,
            am_pm,
            period_bucket,
        } = TimeFeatures::derive(&timestamp);

        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            date_only,
            year,
            month_number,
            month_name,
            day_of_month,
            weekday_name,
            hour,
            minute,
            am_pm,
            period_bucket,
        }
    }

    /// Returns `true` for system and service notifications.
    pub fn is_notification(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }

    /// Returns `true` if the body is the attachment placeholder.
    pub fn is_media_omitted(&self) -> bool {
        self.body == MEDIA_OMITTED
    }

    /// Renders the record as one table row, in [`COLUMNS`](Self::COLUMNS) order.
    pub fn to_row(&self) -> [String; 13] {
        [
            self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.sender.clone(),
            self.body.clone(),
            self.date_only.to_string(),
            self.year.to_string(),
            self.month_number.to_string(),
            self.month_name.clone(),
            self.day_of_month.to_string(),
            self.weekday_name.clone(),
            self.hour.to_string(),
            self.minute.to_string(),
            self.am_pm.clone(),
            self.period_bucket.clone(),
        ]
    }
}

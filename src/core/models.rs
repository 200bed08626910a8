//! Output configuration shared by the table writers.

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// Columns written when derived fields are switched off.
pub const MINIMAL_COLUMNS: [&str; 3] = ["timestamp", "sender", "body"];

/// Configuration for output format.
/// Controls which columns and rows the writers emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include the derived calendar columns (default: true)
    pub include_derived: bool,
    /// Include `group_notification` rows (default: true)
    pub include_notifications: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_derived: true,
            include_notifications: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only `timestamp`, `sender` and `body`.
    #[must_use]
    pub fn minimal(mut self) -> Self {
        self.include_derived = false;
        self
    }

    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.include_notifications = false;
        self
    }

    /// Column names the writers emit, in order.
    pub fn columns(&self) -> &'static [&'static str] {
        if self.include_derived {
            &MessageRecord::COLUMNS
        } else {
            &MINIMAL_COLUMNS
        }
    }

    /// Returns `true` if `record` should be written.
    pub fn keeps(&self, record: &MessageRecord) -> bool {
        self.include_notifications || !record.is_notification()
    }
}

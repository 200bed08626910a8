//! JSON output writer.

use std::fs::File;
use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// One output row, either the whole record or its three base columns.
#[derive(Serialize)]
#[serde(untagged)]
pub(super) enum JsonRow<'a> {
    Full(&'a MessageRecord),
    Minimal {
        timestamp: &'a NaiveDateTime,
        sender: &'a str,
        body: &'a str,
    },
}

impl<'a> JsonRow<'a> {
    pub(super) fn from_record(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        if config.include_derived {
            JsonRow::Full(record)
        } else {
            JsonRow::Minimal {
                timestamp: &record.timestamp,
                sender: &record.sender,
                body: &record.body,
            }
        }
    }
}

pub(super) fn rows<'a>(
    records: &'a [MessageRecord],
    config: &'a OutputConfig,
) -> impl Iterator<Item = JsonRow<'a>> + 'a {
    records
        .iter()
        .filter(|r| config.keeps(r))
        .map(|r| JsonRow::from_record(r, config))
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-01-05T10:15:00", "sender": "Alice", "body": "Hello", ...}
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<JsonRow<'_>> = rows(records, config).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

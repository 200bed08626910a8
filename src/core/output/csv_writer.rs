//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::OutputConfig;
use crate::error::{ChatscopeError, Result};
use crate::record::MessageRecord;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header: [`OutputConfig::columns`]
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_table(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_table(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_table<W: Write>(records: &[MessageRecord], out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    let columns = config.columns();
    writer.write_record(columns)?;

    for record in records.iter().filter(|r| config.keeps(r)) {
        let row = record.to_row();
        writer.write_record(&row[..columns.len()])?;
    }

    writer.flush().map_err(ChatscopeError::from)
}

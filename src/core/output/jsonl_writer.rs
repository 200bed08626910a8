//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits line-oriented tools and incremental
//! loading of large chats.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::json_writer::rows;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// # Format
/// ```text
/// {"timestamp":"2023-01-05T10:15:00","sender":"Alice","body":"Hello",...}
/// {"timestamp":"2023-01-05T10:16:00","sender":"Bob","body":"Hi",...}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(records: &[MessageRecord], out: &mut W, config: &OutputConfig) -> Result<()> {
    for row in rows(records, config) {
        let json = serde_json::to_string(&row)?;
        writeln!(out, "{json}")?;
    }
    Ok(())
}

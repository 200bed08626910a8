//! Tests for output writers (CSV, JSON, JSONL) on parsed transcripts

use chatscope::core::output::{write_csv, write_json, write_jsonl};
use chatscope::format::{OutputFormat, to_format_string, write_to_format};
use chatscope::prelude::*;
use std::fs;
use tempfile::tempdir;

const TRANSCRIPT: &str = "\
15/01/2023, 22:15 - Alice: Hello; with; semicolons
15/01/2023, 22:16 - Bob: Quotes \"inside\" text
15/01/2023, 22:17 - Alice added Carol
16/01/2023, 07:02 - Carol: Line 1
Line 2
";

fn sample_chat() -> ParsedChat {
    preprocess(TRANSCRIPT).unwrap()
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let chat = sample_chat();

        write_csv(chat.records(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, MessageRecord::COLUMNS);

        let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][1], "Alice");
        assert_eq!(&rows[0][2], "Hello; with; semicolons");
        assert_eq!(&rows[1][2], "Quotes \"inside\" text");
        assert_eq!(&rows[2][1], SYSTEM_SENDER);
        assert_eq!(&rows[3][2], "Line 1\nLine 2");
        assert_eq!(&rows[3][12], "7AM-8AM");
    }

    #[test]
    fn test_write_csv_minimal_without_notifications() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let config = OutputConfig::new().minimal().without_notifications();

        write_csv(sample_chat().records(), path.to_str().unwrap(), &config).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("timestamp;sender;body\n"));
        assert!(!content.contains(SYSTEM_SENDER));
        assert!(content.contains("2023-01-15 22:15:00;Alice;"));
    }
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_round_trips_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");
        let chat = sample_chat();

        write_json(chat.records(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

        let back: Vec<MessageRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, chat.records());
    }

    #[test]
    fn test_write_json_minimal_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(
            sample_chat().records(),
            path.to_str().unwrap(),
            &OutputConfig::new().minimal(),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        for row in rows {
            let keys: Vec<&String> = row.as_object().unwrap().keys().collect();
            assert_eq!(keys.len(), 3);
        }
        assert_eq!(rows[0]["timestamp"], "2023-01-15T22:15:00");
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_line_per_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");
        let chat = sample_chat();

        write_jsonl(chat.records(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let records: Vec<MessageRecord> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records, chat.records());
    }
}

// ============================================================================
// Format Dispatch Tests
// ============================================================================

mod format_dispatch_tests {
    use super::*;

    #[test]
    fn test_write_to_format_every_format() {
        let dir = tempdir().unwrap();
        let chat = sample_chat();

        for &format in OutputFormat::all() {
            let path = format.output_path_for(dir.path().join("chat.txt"));
            write_to_format(
                chat.records(),
                path.to_str().unwrap(),
                format,
                &OutputConfig::new(),
            )
            .unwrap();
            assert!(path.exists(), "{format} not written");
            assert_eq!(OutputFormat::from_path(&path).unwrap(), format);
        }
    }

    #[test]
    fn test_to_format_string_matches_file_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");
        let chat = sample_chat();
        let config = OutputConfig::new();

        write_to_format(chat.records(), path.to_str().unwrap(), OutputFormat::Jsonl, &config)
            .unwrap();
        let in_memory = to_format_string(chat.records(), OutputFormat::Jsonl, &config).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), in_memory);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = write_to_format(
            sample_chat().records(),
            "/definitely/not/here/out.csv",
            OutputFormat::Csv,
            &OutputConfig::new(),
        )
        .unwrap_err();
        assert!(err.is_io() || matches!(err, ChatscopeError::Csv(_)));
    }
}

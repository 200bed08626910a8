//! The transcript parser.
//!
//! [`TranscriptParser`] runs the stages in [`parsing`](crate::parsing) in
//! order:
//!
//! ```text
//! Start → FormatDetected → Split → DatesParsed → SendersExtracted → FeaturesDerived → Validated
//! ```
//!
//! Any stage may instead end the run with a [`ChatscopeError`]; the caller
//! then gets the diagnostic and no records at all.
//!
//! # Example
//!
//! ```rust
//! use chatscope::TranscriptParser;
//!
//! let text = "1/5/23, 10:15 AM - Alice: Good morning!\n1/5/23, 10:16 AM - Bob: Morning!";
//! let chat = TranscriptParser::new().parse_str(text)?;
//!
//! assert_eq!(chat.len(), 2);
//! assert_eq!(chat.records()[0].sender, "Alice");
//! assert_eq!(chat.records()[1].period_bucket, "10AM-11AM");
//! # Ok::<(), chatscope::ChatscopeError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::chat::ParsedChat;
use crate::config::ParserConfig;
use crate::error::{ChatscopeError, ParseWarning, Result};
use crate::grammar::FormatGrammar;
use crate::parsing::{
    DateStrategy, RawMessage, Stage, detect_grammar, generic_extract, normalize_sender,
    parse_dates, sample_lines, split_messages, split_sender, validate,
};
use crate::record::MessageRecord;

/// Parses chat transcripts into [`ParsedChat`] results.
///
/// The parser holds only its configuration, so one instance can be shared
/// between threads and reused for any number of transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads a UTF-8 transcript from disk and parses it.
    pub fn parse(&self, path: &Path) -> Result<ParsedChat> {
        let text = fs::read_to_string(path)?;
        self.parse_str(&text).map_err(|e| e.with_path(path))
    }

    /// Parses a transcript held in memory.
    pub fn parse_str(&self, text: &str) -> Result<ParsedChat> {
        self.config.validate()?;
        let _span = tracing::debug_span!("parse_transcript", bytes = text.len()).entered();
        let mut warnings = Vec::new();

        let sample = sample_lines(text, self.config.sample_lines);
        let detected = detect_grammar(sample);
        let grammar = detected.unwrap_or(self.config.fallback_grammar);
        if detected.is_none() {
            record_warning(
                &mut warnings,
                ParseWarning::UnrecognizedFormat {
                    fallback: grammar.name().to_string(),
                },
            );
        }
        debug!(stage = %Stage::FormatDetected, grammar = %grammar, "grammar selected");

        let messages = self.split(text, grammar, &mut warnings)?;
        debug!(stage = %Stage::Split, messages = messages.len(), "transcript split");

        let fragments: Vec<&str> = messages.iter().map(|m| m.timestamp).collect();
        let dates = parse_dates(&fragments, self.config.flexible_dates)?;
        if dates.strategy == DateStrategy::Flexible {
            record_warning(
                &mut warnings,
                ParseWarning::FlexibleDates {
                    dropped: dates.failed(),
                },
            );
        }
        debug!(stage = %Stage::DatesParsed, strategy = %dates.strategy, "dates parsed");

        let dated: Vec<(NaiveDateTime, &str)> = messages
            .iter()
            .zip(dates.values)
            .filter_map(|(message, timestamp)| Some((timestamp?, message.body)))
            .collect();

        let attributed: Vec<(NaiveDateTime, String, &str)> = dated
            .into_iter()
            .map(|(timestamp, message)| {
                let (sender, body) = split_sender(message);
                let sender = normalize_sender(sender, self.config.strip_phone_prefix);
                (timestamp, sender, body)
            })
            .collect();
        debug!(stage = %Stage::SendersExtracted, rows = attributed.len(), "senders extracted");

        let records: Vec<MessageRecord> = attributed
            .into_iter()
            .map(|(timestamp, sender, body)| MessageRecord::new(timestamp, sender, body))
            .collect();
        debug!(stage = %Stage::FeaturesDerived, rows = records.len(), "features derived");

        let (records, dropped) = validate(records, self.config.min_records)?;
        if dropped > 0 {
            record_warning(&mut warnings, ParseWarning::DroppedRecords { dropped });
        }
        debug!(stage = %Stage::Validated, records = records.len(), "transcript parsed");

        Ok(ParsedChat::new(detected, dates.strategy, warnings, records))
    }

    /// Splits with the chosen grammar, then with the catch-all pattern.
    fn split<'a>(
        &self,
        text: &'a str,
        grammar: FormatGrammar,
        warnings: &mut Vec<ParseWarning>,
    ) -> Result<Vec<RawMessage<'a>>> {
        let messages = split_messages(text, grammar);
        if !messages.is_empty() {
            return Ok(messages);
        }

        if self.config.generic_fallback {
            let messages = generic_extract(text);
            if !messages.is_empty() {
                record_warning(
                    warnings,
                    ParseWarning::GenericExtraction {
                        extracted: messages.len(),
                    },
                );
                return Ok(messages);
            }
        }

        Err(ChatscopeError::extraction_failure())
    }
}

fn record_warning(warnings: &mut Vec<ParseWarning>, warning: ParseWarning) {
    warn!("{warning}");
    warnings.push(warning);
}

/// Parses a transcript with the default configuration.
///
/// # Example
///
/// ```rust
/// let chat = chatscope::preprocess(
///     "2023-01-15 22:15:09 - Alice: hi\n2023-01-15 22:16:00 - Bob: hello",
/// )?;
/// assert_eq!(chat.senders(), vec!["Alice", "Bob"]);
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn preprocess(text: &str) -> Result<ParsedChat> {
    TranscriptParser::new().parse_str(text)
}

//! The result of a successful parse.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ParseWarning;
use crate::grammar::FormatGrammar;
use crate::parsing::DateStrategy;
use crate::record::MessageRecord;

/// A validated, immutable record sequence plus how it was obtained.
///
/// Records are in transcript order. Consumers that need time order can use
/// [`sorted_by_timestamp`](Self::sorted_by_timestamp).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedChat {
    detected_grammar: Option<FormatGrammar>,
    date_strategy: DateStrategy,
    warnings: Vec<ParseWarning>,
    records: Vec<MessageRecord>,
}

impl ParsedChat {
    pub(crate) fn new(
        detected_grammar: Option<FormatGrammar>,
        date_strategy: DateStrategy,
        warnings: Vec<ParseWarning>,
        records: Vec<MessageRecord>,
    ) -> Self {
        Self {
            detected_grammar,
            date_strategy,
            warnings,
            records,
        }
    }

    /// The grammar detection picked, or `None` if the transcript was not recognised.
    pub fn detected_grammar(&self) -> Option<FormatGrammar> {
        self.detected_grammar
    }

    /// How the timestamps were parsed.
    pub fn date_strategy(&self) -> DateStrategy {
        self.date_strategy
    }

    /// Recoverable problems met along the way.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Returns `true` if any fallback was needed.
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The records, in transcript order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Consumes the result and returns the records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }

    /// Iterates over the records in transcript order.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct authors in order of first appearance, notifications excluded.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| !record.is_notification())
            .map(|record| record.sender.as_str())
            .filter(|sender| seen.insert(*sender))
            .collect()
    }

    /// Returns a copy of the records sorted by timestamp.
    ///
    /// The sort is stable, so messages sharing a minute keep transcript order.
    pub fn sorted_by_timestamp(&self) -> Vec<MessageRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by_key(|record| record.timestamp);
        sorted
    }

    /// First and last calendar date covered by the chat.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date_only).min()?;
        let last = self.records.iter().map(|r| r.date_only).max()?;
        Some((first, last))
    }
}

impl IntoIterator for ParsedChat {
    type Item = MessageRecord;
    type IntoIter = std::vec::IntoIter<MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedChat {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

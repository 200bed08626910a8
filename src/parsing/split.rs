//! Message splitting.
//!
//! A transcript is cut at every occurrence of the grammar's timestamp pattern.
//! Each match becomes a timestamp fragment and the text up to the next match
//! (or end of input) becomes that message's body, continuation lines included.
//! Text before the first match is preamble and is discarded.

use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::FormatGrammar;

/// Permissive catch-all for lines that no catalog grammar recognises.
///
/// Tolerates `[..]` / `(..)` wrapping, `/`, `.` or `-` date separators,
/// optional seconds and an optional AM/PM marker.
static GENERIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\[\(]?(?:\d{1,4}[/.\-]){2}\d{1,4}(?:[,\s])+\d{1,2}:\d{1,2}(?::\d{1,2})?(?:\s*[aApP][mM])?[\]\)]?\s*[^\n]+",
    )
    .expect("generic line pattern is valid")
});

const GENERIC_DELIMITER: &str = " - ";

/// One message cut out of the transcript, borrowing from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMessage<'a> {
    /// The matched timestamp text, separator included (e.g. `"1/5/23, 10:15 AM - "`)
    pub timestamp: &'a str,
    /// Everything after the timestamp up to the next message
    pub body: &'a str,
}

/// Splits `text` on `grammar`'s timestamp pattern.
///
/// Returns one [`RawMessage`] per match, so timestamps and bodies are always
/// aligned. An empty vector means the pattern never occurs.
pub fn split_messages(text: &str, grammar: FormatGrammar) -> Vec<RawMessage<'_>> {
    let matches: Vec<_> = grammar.regex().find_iter(text).collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
            RawMessage {
                timestamp: m.as_str(),
                body: &text[m.end()..end],
            }
        })
        .collect()
}

/// Recovers messages with the catch-all pattern.
///
/// Every candidate line is split at its first `" - "`; the left side plus the
/// delimiter is the timestamp and the right side is the body. Candidates
/// without the delimiter are skipped.
pub fn generic_extract(text: &str) -> Vec<RawMessage<'_>> {
    GENERIC_LINE
        .find_iter(text)
        .filter_map(|m| {
            let block = m.as_str();
            let at = block.find(GENERIC_DELIMITER)?;
            let split = at + GENERIC_DELIMITER.len();
            Some(RawMessage {
                timestamp: &block[..split],
                body: &block[split..],
            })
        })
        .collect()
}

//! Grammar detection.
//!
//! Detection looks only at the head of a transcript. Every grammar's pattern
//! is searched (not anchored) in the sample, in catalog priority order, and the
//! first one that matches anywhere wins. There is no scoring: position in
//! [`FormatGrammar::all`] is the only tie-break.

use crate::grammar::FormatGrammar;

/// Returns the first `lines` lines of `text` as a borrowed slice.
///
/// The trailing newline of the last sampled line is not included. A
/// transcript shorter than `lines` is returned whole.
pub fn sample_lines(text: &str, lines: usize) -> &str {
    if lines == 0 {
        return "";
    }
    match text.match_indices('\n').nth(lines - 1) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Returns the first grammar whose timestamp pattern occurs in `sample`.
///
/// Returns `None` if no catalog grammar matches.
pub fn detect_grammar(sample: &str) -> Option<FormatGrammar> {
    FormatGrammar::all()
        .iter()
        .copied()
        .find(|grammar| grammar.regex().is_match(sample))
}

//! The transcript parsing stages.
//!
//! Each stage is a pure transformation over borrowed transcript text:
//!
//! 1. [`detect`] picks a [`FormatGrammar`](crate::FormatGrammar) from a sample
//! 2. [`split`] cuts the transcript into (timestamp, message) pairs
//! 3. [`dates`] turns timestamp fragments into calendar values
//! 4. [`sender`] separates the author from the message text
//! 5. [`features`] derives calendar and time-of-day fields
//! 6. [`validate`] enforces the record invariants
//!
//! [`TranscriptParser`](crate::TranscriptParser) drives them in order.

pub mod dates;
pub mod detect;
pub mod features;
pub mod sender;
pub mod split;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use dates::{DateStrategy, ParsedDates, parse_dates, parse_flexible, parse_with_template};
pub use detect::{detect_grammar, sample_lines};
pub use features::{TimeFeatures, period_bucket};
pub use sender::{SYSTEM_SENDER, normalize_sender, split_sender};
pub use split::{RawMessage, generic_extract, split_messages};
pub use validate::validate;

/// Pipeline progress, in the order the stages complete.
///
/// Used to label log events and to tell which stage a
/// [`ChatscopeError`](crate::ChatscopeError) came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    FormatDetected,
    Split,
    DatesParsed,
    SendersExtracted,
    FeaturesDerived,
    Validated,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::FormatDetected => "format detection",
            Stage::Split => "message splitting",
            Stage::DatesParsed => "date parsing",
            Stage::SendersExtracted => "sender extraction",
            Stage::FeaturesDerived => "feature derivation",
            Stage::Validated => "validation",
        };
        f.write_str(name)
    }
}

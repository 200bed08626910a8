//! # chatscope
//!
//! Turns plain-text chat transcript exports into a clean table of messages
//! with calendar features for downstream analysis.
//!
//! ## Overview
//!
//! A transcript is a sequence of lines such as
//!
//! ```text
//! 1/5/23, 10:15 AM - Alice: Good morning!
//! 1/5/23, 10:16 AM - Bob: Morning!
//! ```
//!
//! where the timestamp dialect depends on platform, locale and app version.
//! chatscope recognises the dialect from a sample of the text, splits the
//! transcript into messages, reads the timestamps, separates sender from
//! body and derives the calendar fields (weekday, hour, one-hour period
//! bucket and so on). Unknown dialects degrade to a catch-all extractor and
//! per-row date parsing; every such fallback is reported as a
//! [`ParseWarning`] on the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscope::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "1/5/23, 10:15 AM - Alice: Good morning!\n1/5/23, 10:16 AM - Bob: Morning!";
//!     let chat = preprocess(text)?;
//!
//!     for record in &chat {
//!         println!("{} [{}] {}", record.sender, record.period_bucket, record.body);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`] and [`preprocess`]
//! - [`parsing`] - The individual pipeline stages
//! - [`grammar`] - [`FormatGrammar`], the catalog of timestamp dialects
//! - [`record`] - [`MessageRecord`], one output row
//! - [`chat`] - [`ParsedChat`], the parse result
//! - [`config`] - [`ParserConfig`]
//! - [`core`] - [`OutputConfig`](core::OutputConfig) and the table writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - [`ChatscopeError`], [`ParseWarning`], [`Result`]
//! - `cli` - Command-line arguments (feature `cli`)
//!
//! ## Logging
//!
//! The parser emits [`tracing`] events: `debug` for each stage and `warn`
//! for each fallback. Install any subscriber to see them.

pub mod chat;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod grammar;
pub mod parser;
pub mod parsing;
pub mod record;

pub use chat::ParsedChat;
pub use config::ParserConfig;
pub use error::{ChatscopeError, ParseWarning, Result};
pub use grammar::FormatGrammar;
pub use parser::{TranscriptParser, preprocess};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatscope::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chat::ParsedChat;
    pub use crate::config::ParserConfig;
    pub use crate::core::models::OutputConfig;
    pub use crate::error::{ChatscopeError, ParseWarning, Result};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::grammar::FormatGrammar;
    pub use crate::parser::{TranscriptParser, preprocess};
    pub use crate::parsing::{DateStrategy, SYSTEM_SENDER, Stage};
    pub use crate::record::MessageRecord;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}

//! Parser configuration.
//!
//! [`ParserConfig`] controls how hard the parser tries before giving up. The
//! defaults reproduce the behaviour described in the crate docs: a 10-line
//! detection sample, generic and flexible fallbacks on, at least two records.
//!
//! # Example
//!
//! ```rust
//! use chatscope::config::ParserConfig;
//! use chatscope::TranscriptParser;
//!
//! let config = ParserConfig::new()
//!     .with_sample_lines(25)
//!     .with_min_records(10);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatscopeError, Result};
use crate::grammar::FormatGrammar;

/// Configuration for transcript parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines from the start of the transcript used for detection (default: 10)
    pub sample_lines: usize,

    /// Minimum number of records a successful parse must produce (default: 2)
    pub min_records: usize,

    /// Grammar used when detection finds nothing (default: US 12h comma)
    pub fallback_grammar: FormatGrammar,

    /// Strip leading international numbers from sender names (default: true)
    pub strip_phone_prefix: bool,

    /// Retry with the catch-all pattern when splitting finds nothing (default: true)
    pub generic_fallback: bool,

    /// Parse dates row by row when no template fits the column (default: true)
    pub flexible_dates: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            sample_lines: 10,
            min_records: 2,
            fallback_grammar: FormatGrammar::DEFAULT,
            strip_phone_prefix: true,
            generic_fallback: true,
            flexible_dates: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with both fallbacks disabled.
    ///
    /// Useful when a silently degraded parse is worse than an error.
    pub fn strict() -> Self {
        Self {
            generic_fallback: false,
            flexible_dates: false,
            ..Self::default()
        }
    }

    /// Sets the number of lines sampled for detection.
    #[must_use]
    pub fn with_sample_lines(mut self, lines: usize) -> Self {
        self.sample_lines = lines;
        self
    }

    /// Sets the minimum number of records.
    #[must_use]
    pub fn with_min_records(mut self, min: usize) -> Self {
        self.min_records = min;
        self
    }

    /// Sets the grammar used when detection fails.
    #[must_use]
    pub fn with_fallback_grammar(mut self, grammar: FormatGrammar) -> Self {
        self.fallback_grammar = grammar;
        self
    }

    /// Sets whether phone-number prefixes are stripped from senders.
    #[must_use]
    pub fn with_strip_phone_prefix(mut self, strip: bool) -> Self {
        self.strip_phone_prefix = strip;
        self
    }

    /// Enables or disables the catch-all extraction fallback.
    #[must_use]
    pub fn with_generic_fallback(mut self, enabled: bool) -> Self {
        self.generic_fallback = enabled;
        self
    }

    /// Enables or disables the per-row date fallback.
    #[must_use]
    pub fn with_flexible_dates(mut self, enabled: bool) -> Self {
        self.flexible_dates = enabled;
        self
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.sample_lines == 0 {
            return Err(ChatscopeError::invalid_config(
                "sample_lines must be at least 1",
            ));
        }
        if self.min_records == 0 {
            return Err(ChatscopeError::invalid_config(
                "min_records must be at least 1",
            ));
        }
        Ok(())
    }
}

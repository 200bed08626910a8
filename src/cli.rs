//! Command-line interface definition using clap.
//!
//! [`Args`] is the argument structure of the `chatscope` binary. It also
//! knows how to turn itself into the library's [`ParserConfig`] and
//! [`OutputConfig`], so the binary stays a thin shell:
//!
//! ```rust
//! use chatscope::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::try_parse_from(["chatscope", "chat.txt", "-f", "jsonl", "--strict"]).unwrap();
//! assert!(!args.parser_config().generic_fallback);
//! assert_eq!(args.output_path(), "chat.jsonl");
//! ```

use clap::{Parser, ValueEnum};

use crate::config::ParserConfig;
use crate::core::models::OutputConfig;

/// Turn a chat transcript export into a table of messages with
/// calendar features.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscope")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscope chat.txt
    chatscope chat.txt -o messages.csv --minimal
    chatscope chat.txt -f jsonl --sort
    RUST_LOG=chatscope=debug chatscope chat.txt")]
pub struct Args {
    /// Path to the transcript (UTF-8 text)
    pub input: String,

    /// Path to output file [default: input path with the format's extension]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Lines sampled for format detection
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub sample_lines: usize,

    /// Fail unless at least this many records are parsed
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub min_records: usize,

    /// Disable the generic extraction and flexible date fallbacks
    #[arg(long)]
    pub strict: bool,

    /// Write only timestamp, sender and body
    #[arg(long)]
    pub minimal: bool,

    /// Leave system notifications out of the output
    #[arg(long)]
    pub no_notifications: bool,

    /// Sort records by timestamp before writing
    #[arg(long)]
    pub sort: bool,

    /// Log every pipeline stage (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser configuration selected by the flags.
    pub fn parser_config(&self) -> ParserConfig {
        let base = if self.strict {
            ParserConfig::strict()
        } else {
            ParserConfig::new()
        };
        base.with_sample_lines(self.sample_lines)
            .with_min_records(self.min_records)
    }

    /// Output configuration selected by the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.minimal {
            config = config.minimal();
        }
        if self.no_notifications {
            config = config.without_notifications();
        }
        config
    }

    /// The `--output` path, or the input path with the format's extension.
    pub fn output_path(&self) -> String {
        match &self.output {
            Some(path) => path.clone(),
            None => crate::format::OutputFormat::from(self.format)
                .output_path_for(&self.input)
                .to_string_lossy()
                .into_owned(),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

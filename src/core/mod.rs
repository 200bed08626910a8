//! Output side of chatscope.
//!
//! This module contains:
//! - [`models`] - [`OutputConfig`], which columns and rows get written
//! - [`output`] - Table writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatscope::core::{OutputConfig, to_csv, write_json, write_jsonl};
//! # }
//! ```

pub mod models;
pub mod output;

pub use models::OutputConfig;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

//! codec-report: bar-chart reports for compression codec benchmarks.
//!
//! A results table (`codec`, `compress_time_ms`, `compressed_kb`,
//! `decompress_time_ms`) is read from CSV/TSV, narrowed to a set of codecs,
//! and drawn as stacked plotly bar panels in an HTML page.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod report;

pub use error::{ErrorCategory, ReportError};

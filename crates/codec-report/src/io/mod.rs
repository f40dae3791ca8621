//! Input readers for benchmark results files.
pub mod results_csv;

pub use results_csv::{read_results, read_results_with_config, ResultsReaderConfig};

//! Benchmark results CSV/TSV reader.
use std::path::Path;

use csv::StringRecord;

use crate::data_handling::{ResultRow, ResultTable};
use crate::error::{ReportError, Result};

pub const CODEC_COLUMN: &str = "codec";
pub const COMPRESS_TIME_COLUMN: &str = "compress_time_ms";
pub const COMPRESSED_SIZE_COLUMN: &str = "compressed_kb";
pub const DECOMPRESS_TIME_COLUMN: &str = "decompress_time_ms";

/// Configuration for reading a results file.
#[derive(Debug, Clone, Default)]
pub struct ResultsReaderConfig {
    /// Field delimiter. When `None`, `.tsv` files use tabs and everything
    /// else uses commas.
    pub delimiter: Option<u8>,
}

/// Read a results file with the delimiter inferred from its extension.
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<ResultTable> {
    read_results_with_config(path, &ResultsReaderConfig::default())
}

/// Read a results file using a custom configuration.
pub fn read_results_with_config<P: AsRef<Path>>(
    path: P,
    config: &ResultsReaderConfig,
) -> Result<ResultTable> {
    let path = path.as_ref();
    let delimiter = config
        .delimiter
        .unwrap_or_else(|| infer_delimiter(path));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ReportError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let require = |name: &str| {
        find_column(&headers, name).ok_or_else(|| ReportError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    };
    let codec_idx = require(CODEC_COLUMN)?;
    let compress_idx = require(COMPRESS_TIME_COLUMN)?;
    let size_idx = require(COMPRESSED_SIZE_COLUMN)?;
    let decompress_idx = require(DECOMPRESS_TIME_COLUMN)?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row = row_idx + 1;

        let codec = record.get(codec_idx).unwrap_or_default().to_string();
        rows.push(ResultRow {
            codec,
            compress_time_ms: parse_number(&record, compress_idx, COMPRESS_TIME_COLUMN, row)?,
            compressed_kb: parse_number(&record, size_idx, COMPRESSED_SIZE_COLUMN, row)?,
            decompress_time_ms: parse_number(&record, decompress_idx, DECOMPRESS_TIME_COLUMN, row)?,
        });
    }

    log::debug!(
        "Loaded {} result rows from {}",
        rows.len(),
        path.display()
    );
    Ok(ResultTable::new(rows))
}

fn infer_delimiter(path: &Path) -> u8 {
    let is_tsv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    if is_tsv {
        b'\t'
    } else {
        b','
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn parse_number(record: &StringRecord, idx: usize, column: &str, row: usize) -> Result<f64> {
    let value = record.get(idx).unwrap_or_default();
    value.parse::<f64>().map_err(|_| ReportError::InvalidValue {
        column: column.to_string(),
        row,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn tsv_extension_selects_tab() {
        assert_eq!(infer_delimiter(&PathBuf::from("bench/result.tsv")), b'\t');
        assert_eq!(infer_delimiter(&PathBuf::from("bench/RESULT.TSV")), b'\t');
        assert_eq!(infer_delimiter(&PathBuf::from("bench/result.csv")), b',');
        assert_eq!(infer_delimiter(&PathBuf::from("result")), b',');
    }

    #[test]
    fn column_lookup_ignores_case() {
        let headers = StringRecord::from(vec!["Codec", "compressed_KB"]);
        assert_eq!(find_column(&headers, "codec"), Some(0));
        assert_eq!(find_column(&headers, "compressed_kb"), Some(1));
        assert_eq!(find_column(&headers, "decompress_time_ms"), None);
    }
}

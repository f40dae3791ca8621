//! In-memory representation of a benchmark results table.
use std::collections::HashSet;

/// Codecs compared by the default report.
pub const DEFAULT_CODECS: [&str; 2] = ["plain + zstd", "delta + zstd"];

/// One line of the benchmark results file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub codec: String,
    pub compress_time_ms: f64,
    pub compressed_kb: f64,
    pub decompress_time_ms: f64,
}

impl ResultRow {
    pub fn new(
        codec: impl Into<String>,
        compress_time_ms: f64,
        compressed_kb: f64,
        decompress_time_ms: f64,
    ) -> Self {
        Self {
            codec: codec.into(),
            compress_time_ms,
            compressed_kb,
            decompress_time_ms,
        }
    }
}

/// Result rows in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Codec names in row order.
    pub fn codecs(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.codec.clone()).collect()
    }

    /// Keep only the rows whose codec is one of `allowed`, preserving order.
    ///
    /// An empty result is not an error here; rendering rejects it.
    pub fn filter_codecs<S: AsRef<str>>(&self, allowed: &[S]) -> ResultTable {
        let allowed: HashSet<&str> = allowed.iter().map(|codec| codec.as_ref()).collect();
        let rows = self
            .rows
            .iter()
            .filter(|row| allowed.contains(row.codec.as_str()))
            .cloned()
            .collect();
        ResultTable { rows }
    }
}

impl FromIterator<ResultRow> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultTable {
        ResultTable::new(vec![
            ResultRow::new("plain", 1.0, 300.0, 2.0),
            ResultRow::new("delta + zstd", 3.0, 80.0, 7.0),
            ResultRow::new("plain + lz4", 1.5, 150.0, 1.0),
            ResultRow::new("plain + zstd", 2.5, 120.0, 5.0),
        ])
    }

    #[test]
    fn filter_keeps_allowed_rows_in_file_order() {
        let filtered = sample().filter_codecs(&DEFAULT_CODECS);
        assert_eq!(filtered.codecs(), vec!["delta + zstd", "plain + zstd"]);
        assert_eq!(filtered.rows()[0].compressed_kb, 80.0);
        assert_eq!(filtered.rows()[1].decompress_time_ms, 5.0);
    }

    #[test]
    fn filter_without_matches_is_empty() {
        let filtered = sample().filter_codecs(&["brotli"]);
        assert!(filtered.is_empty());
        assert_eq!(filtered.len(), 0);
    }

    #[test]
    fn filter_keeps_duplicate_codecs() {
        let table: ResultTable = vec![
            ResultRow::new("plain + zstd", 1.0, 10.0, 1.0),
            ResultRow::new("plain + zstd", 2.0, 20.0, 2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.filter_codecs(&DEFAULT_CODECS).len(), 2);
    }

    #[test]
    fn codec_match_is_exact() {
        let table = ResultTable::new(vec![ResultRow::new("Plain + Zstd", 1.0, 10.0, 1.0)]);
        assert!(table.filter_codecs(&DEFAULT_CODECS).is_empty());
    }
}

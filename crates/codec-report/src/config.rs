use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data_handling::DEFAULT_CODECS;
use crate::error::{ReportError, Result};
use crate::report::plots::{Metric, ALL_METRICS, DEFAULT_METRICS};
use crate::report::PageOptions;

/// Settings for one report run. Every field has a default, so `{}` is a
/// valid configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Benchmark results file (`.csv`, or `.tsv` for tab separated).
    pub input: PathBuf,
    /// Report destination; overwritten on every run.
    pub output: PathBuf,
    /// Codecs to keep, matched exactly.
    pub codecs: Vec<String>,
    /// Prepend a compression time panel.
    pub show_compress_time: bool,
    /// Panel width in pixels.
    pub width: usize,
    /// Panel height in pixels.
    pub height: usize,
    pub title: String,
    /// Embed plotly.js in the page instead of loading it from the CDN.
    pub offline: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let page = PageOptions::default();
        Self {
            input: PathBuf::from("result.csv"),
            output: PathBuf::from("codec_comparison.html"),
            codecs: DEFAULT_CODECS.iter().map(|codec| codec.to_string()).collect(),
            show_compress_time: false,
            width: page.width,
            height: page.height,
            title: page.title,
            offline: page.offline,
        }
    }
}

impl ReportConfig {
    /// Panels to draw, top to bottom.
    pub fn metrics(&self) -> &'static [Metric] {
        if self.show_compress_time {
            &ALL_METRICS
        } else {
            &DEFAULT_METRICS
        }
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            offline: self.offline,
        }
    }
}

/// Load a report configuration from a JSON file.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ReportError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

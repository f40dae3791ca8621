use plotly::common::Marker;
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot};

use crate::data_handling::{ResultRow, ResultTable};
use crate::error::{ReportError, Result};

/// Numeric result columns that can be drawn as a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    CompressTimeMs,
    CompressedKb,
    DecompressTimeMs,
}

impl Metric {
    pub fn column(&self) -> &'static str {
        match self {
            Metric::CompressTimeMs => "compress_time_ms",
            Metric::CompressedKb => "compressed_kb",
            Metric::DecompressTimeMs => "decompress_time_ms",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::CompressTimeMs => "Compression Time (ms)",
            Metric::CompressedKb => "Compressed Size (KB)",
            Metric::DecompressTimeMs => "Decompression Time (ms)",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::CompressTimeMs | Metric::DecompressTimeMs => "Time (ms)",
            Metric::CompressedKb => "Size (KB)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Metric::CompressTimeMs => "blue",
            Metric::CompressedKb => "green",
            Metric::DecompressTimeMs => "red",
        }
    }

    pub fn value(&self, row: &ResultRow) -> f64 {
        match self {
            Metric::CompressTimeMs => row.compress_time_ms,
            Metric::CompressedKb => row.compressed_kb,
            Metric::DecompressTimeMs => row.decompress_time_ms,
        }
    }
}

/// Panels drawn by default, top to bottom.
pub const DEFAULT_METRICS: [Metric; 2] = [Metric::CompressedKb, Metric::DecompressTimeMs];

/// Panels drawn when compression time is requested.
pub const ALL_METRICS: [Metric; 3] = [
    Metric::CompressTimeMs,
    Metric::CompressedKb,
    Metric::DecompressTimeMs,
];

/// Tick label rotation in degrees, counter-clockwise.
pub const TICK_ROTATION: f64 = 45.0;

/// A single bar chart: one bar per codec, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub metric: Metric,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl Panel {
    pub fn from_table(table: &ResultTable, metric: Metric) -> Self {
        Self {
            metric,
            categories: table.codecs(),
            values: table.rows().iter().map(|row| metric.value(row)).collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.metric.title()
    }

    pub fn y_label(&self) -> &'static str {
        self.metric.y_label()
    }

    /// Build the plotly bar chart for this panel.
    pub fn to_plot(&self, width: usize, height: usize) -> Plot {
        let trace = Bar::new(self.categories.clone(), self.values.clone())
            .name(self.metric.column())
            .marker(Marker::new().color(self.metric.color()));

        let layout = Layout::new()
            .title(self.title())
            .width(width)
            .height(height)
            .show_legend(false)
            .x_axis(Axis::new().tick_angle(-TICK_ROTATION))
            .y_axis(Axis::new().title(self.y_label()));

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(layout);
        plot
    }
}

/// Stacked panels rendered from one filtered table.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
    pub rows: Vec<ResultRow>,
}

impl Figure {
    pub fn panel(&self, metric: Metric) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.metric == metric)
    }
}

/// Render the default size and decompression time panels.
pub fn render(table: &ResultTable) -> Result<Figure> {
    render_metrics(table, &DEFAULT_METRICS)
}

/// Render one panel per metric, in the given order.
///
/// Fails with [`ReportError::NothingToRender`] when the table has no rows.
pub fn render_metrics(table: &ResultTable, metrics: &[Metric]) -> Result<Figure> {
    if table.is_empty() {
        return Err(ReportError::NothingToRender);
    }

    let panels = metrics
        .iter()
        .map(|&metric| Panel::from_table(table, metric))
        .collect();

    Ok(Figure {
        panels,
        rows: table.rows().to_vec(),
    })
}

//! Plotting and report output.
//!
//! `plots` turns a filtered results table into a [`plots::Figure`] of bar
//! panels backed by plotly; `html` lays the panels out in a single page and
//! writes it to disk.
pub mod html;
pub mod plots;

pub use html::{figure_to_html, save_figure, PageOptions};
pub use plots::{render, render_metrics, Figure, Metric, Panel};

use std::fs;
use std::path::Path;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::error::{ReportError, Result};
use crate::report::plots::{Figure, Metric};

const PLOTLY_JS_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// Page layout options for a rendered figure.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    /// Width of each panel in pixels.
    pub width: usize,
    /// Height of each panel in pixels.
    pub height: usize,
    /// Inline plotly's bundled JavaScript instead of linking the CDN, so the
    /// page renders without network access.
    pub offline: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Codec Comparison".to_string(),
            width: 1200,
            height: 900,
            offline: false,
        }
    }
}

/// Build the HTML page for a figure: panels stacked top to bottom, followed
/// by the plotted rows.
pub fn figure_to_html(figure: &Figure, options: &PageOptions) -> Markup {
    let panels: Vec<String> = figure
        .panels
        .iter()
        .enumerate()
        .map(|(idx, panel)| {
            let div_id = format!("panel-{}", idx);
            panel
                .to_plot(options.width, options.height)
                .to_inline_html(Some(div_id.as_str()))
        })
        .collect();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (options.title) }
                @if options.offline {
                    (PreEscaped(Plot::offline_js_sources()))
                } @else {
                    script src=(PLOTLY_JS_CDN) {}
                }
            }
            body {
                h1 { (options.title) }
                @for panel in &panels {
                    div class="panel" { (PreEscaped(panel)) }
                }
                h2 { "Plotted rows" }
                table {
                    thead {
                        tr {
                            th { "codec" }
                            @for metric in [Metric::CompressTimeMs, Metric::CompressedKb, Metric::DecompressTimeMs] {
                                th { (metric.column()) }
                            }
                        }
                    }
                    tbody {
                        @for row in &figure.rows {
                            tr {
                                td { (row.codec) }
                                td { (row.compress_time_ms) }
                                td { (row.compressed_kb) }
                                td { (row.decompress_time_ms) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Write the figure to `path`, replacing any existing file.
pub fn save_figure<P: AsRef<Path>>(figure: &Figure, path: P, options: &PageOptions) -> Result<()> {
    let path = path.as_ref();
    let page = figure_to_html(figure, options);
    fs::write(path, page.into_string()).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Wrote {} panel(s) for {} codec row(s) to {}",
        figure.panels.len(),
        figure.rows.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::{ResultRow, ResultTable};
    use crate::report::plots::render;

    fn figure() -> Figure {
        render(&ResultTable::new(vec![
            ResultRow::new("plain + zstd", 11.0, 120.0, 5.0),
            ResultRow::new("delta + zstd", 13.0, 80.0, 7.0),
        ]))
        .unwrap()
    }

    #[test]
    fn page_contains_each_panel_in_order() {
        let page = figure_to_html(&figure(), &PageOptions::default()).into_string();
        let size = page.find("Compressed Size (KB)").unwrap();
        let decompress = page.find("Decompression Time (ms)").unwrap();
        assert!(size < decompress);
        assert!(page.contains("panel-0"));
        assert!(page.contains("panel-1"));
        assert!(!page.contains("panel-2"));
        assert!(page.contains(PLOTLY_JS_CDN));
    }

    #[test]
    fn offline_page_does_not_link_cdn() {
        let options = PageOptions {
            offline: true,
            ..PageOptions::default()
        };
        let page = figure_to_html(&figure(), &options).into_string();
        assert!(!page.contains(&format!("src=\"{}\"", PLOTLY_JS_CDN)));
        assert!(page.contains("panel-0"));
        assert!(page.len() > figure_to_html(&figure(), &PageOptions::default()).into_string().len());
    }

    #[test]
    fn codec_names_are_escaped_in_row_table() {
        let table = ResultTable::new(vec![ResultRow::new("<b>raw</b>", 1.0, 2.0, 3.0)]);
        let page = figure_to_html(&render(&table).unwrap(), &PageOptions::default()).into_string();
        assert!(page.contains("&lt;b&gt;raw&lt;/b&gt;"));
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("report.html");
        let err = save_figure(&figure(), &target, &PageOptions::default()).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }
}

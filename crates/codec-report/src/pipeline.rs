//! Load, filter, render and save in one pass.
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::io::read_results;
use crate::report::{render_metrics, save_figure, Figure};

/// Produce the report described by `config`.
///
/// Nothing is written unless loading, filtering and rendering all succeed.
pub fn run(config: &ReportConfig) -> Result<Figure> {
    let table = read_results(&config.input)?;
    log::info!(
        "Loaded {} rows from {}",
        table.len(),
        config.input.display()
    );

    let filtered = table.filter_codecs(&config.codecs);
    if filtered.is_empty() {
        return Err(ReportError::EmptyResult {
            codecs: config.codecs.clone(),
        });
    }
    log::info!(
        "Kept {} of {} rows for codecs {:?}",
        filtered.len(),
        table.len(),
        config.codecs
    );

    let figure = render_metrics(&filtered, config.metrics())?;
    save_figure(&figure, &config.output, &config.page_options())?;
    Ok(figure)
}

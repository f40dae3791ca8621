use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use codec_report::config::{load_report_config, ReportConfig};

/// Build the run configuration: the JSON file (or defaults) with CLI
/// overrides applied on top.
pub fn config_from_arguments(matches: &ArgMatches) -> Result<ReportConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[CodecReport] Using config: {:?}", config_path);
            load_report_config(config_path)
                .with_context(|| format!("Failed to load config file: {:?}", config_path))?
        }
        None => {
            log::info!("[CodecReport] No config provided; using defaults.");
            ReportConfig::default()
        }
    };

    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input = input.clone();
    }

    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }

    if let Some(codecs) = matches.get_many::<String>("codec") {
        config.codecs = codecs.cloned().collect();
    }

    if matches.get_flag("compress_time") {
        config.show_compress_time = true;
    }

    if matches.get_flag("offline") {
        config.offline = true;
    }

    Ok(config)
}

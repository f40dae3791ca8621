use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use codec_report::config::ReportConfig;
use codec_report::pipeline;
use codec_report_cli::render::input::config_from_arguments;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CODEC_REPORT_LOG", "error,codec_report=info"))
        .init();

    let matches = Command::new("codec-report")
        .version(clap::crate_version!())
        .about("Bar-chart comparison of compression codec benchmark results")
        .subcommand(
            Command::new("render")
                .about("Render compressed size and decompression time panels for selected codecs")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON report configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help(
                            "Benchmark results file (tab separated for *.tsv, comma separated otherwise). \
                             Overrides the input specified in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(
                            "Report file to write; an existing file is replaced. \
                             Overrides the output specified in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("codec")
                        .short('c')
                        .long("codec")
                        .help("Codec to include; repeat to include several. Replaces the configured set.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .action(ArgAction::Append)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("compress_time")
                        .long("compress-time")
                        .help("Add a compression time panel above the other panels.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .help("Embed plotly.js in the report so it opens without network access.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("template").about("Print the default JSON report configuration"),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render(render_matches),
        Some(("template", _)) => {
            println!("{}", serde_json::to_string_pretty(&ReportConfig::default())?);
            Ok(())
        }
        Some(_) => unreachable!(),
        None => {
            log::info!("[CodecReport] No subcommand; rendering with default settings.");
            render_report(ReportConfig::default())
        }
    }
}

fn handle_render(matches: &ArgMatches) -> Result<()> {
    let config = match config_from_arguments(matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid arguments: {:#}", e);
            std::process::exit(1)
        }
    };
    render_report(config)
}

fn render_report(config: ReportConfig) -> Result<()> {
    log::info!(
        "[CodecReport] Rendering {:?} for codecs {:?}",
        config.input,
        config.codecs
    );

    match pipeline::run(&config) {
        Ok(figure) => {
            eprintln!(
                "[CodecReport] Wrote {} panel(s) to {:?}",
                figure.panels.len(),
                config.output
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Report failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

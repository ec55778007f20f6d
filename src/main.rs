use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use utm_tagger::cli_args::CommandLineArgs;
use utm_tagger::common::constants::SETTINGS_FILE;
use utm_tagger::common::time_utils::current_report_timestamp;
use utm_tagger::pipeline;
use utm_tagger::preflight;
use utm_tagger::settings::UtmSettings;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("UTM Tagger v{} starting up...", env!("CARGO_PKG_VERSION"));

    let toolkit = preflight::check()?;

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();

    debug!("Loading UTM settings...");
    let settings = UtmSettings::load_or_default(SETTINGS_FILE)?;
    info!(
        "Tagging with utm_source={}, utm_medium={}, utm_campaign={}",
        settings.source, settings.medium, settings.campaign
    );

    let output_dir = Path::new(".");
    let summary = pipeline::run(
        &cli_args.input,
        output_dir,
        &settings,
        &toolkit,
        &current_report_timestamp(),
    )?;

    for line in summary.status_lines(output_dir) {
        println!("{}", line);
    }

    info!(
        "{} of {} eligible link(s) already tagged ({:.1}%)",
        summary.stats.tagged,
        summary.stats.eligible,
        summary.stats.tagged_rate()
    );
    Ok(())
}

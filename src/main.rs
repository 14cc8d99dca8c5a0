use anyhow::anyhow;
use clap::Parser;
use clap::error::ErrorKind;
use env_logger::Builder;
use log::{LevelFilter, info};

mod analyzer;
mod ui;

use analyzer::{ChannelModel, load_channel};
use ui::AppState;

/// Usage line printed on a bad invocation (exit status 1).
const USAGE: &str = "usage: channel-chart <friis_file> <tworayground_file> <lognormal_file>";

/// Compare SNR and throughput logs across three wireless channel models.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log file recorded with the Friis propagation model
    friis_file: String,
    /// Log file recorded with the TwoRayGround propagation model
    tworayground_file: String,
    /// Log file recorded with the LogNormal propagation model
    lognormal_file: String,
}

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("channel_chart"), LevelFilter::Debug)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    info!("Starting up");

    // Parse all three files before any UI work; each load is best-effort and
    // yields empty series for unreadable files.
    let channels = [
        load_channel(ChannelModel::Friis, &args.friis_file),
        load_channel(ChannelModel::TwoRayGround, &args.tworayground_file),
        load_channel(ChannelModel::LogNormal, &args.lognormal_file),
    ];

    for channel in &channels {
        info!(
            "{}: {} SNR records, {} throughput records",
            channel.model.label(),
            channel.snr.len(),
            channel.throughput.len()
        );
    }

    // Start the GUI on the main thread (required on macOS); blocks until the
    // operator closes the window.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default(),
        ..Default::default()
    };
    eframe::run_native(
        "Channel Model Charts",
        native_options,
        Box::new(move |_cc| Ok(Box::new(AppState::new(channels)))),
    )
    .map_err(|err| anyhow!("failed to start chart display: {}", err))?;

    Ok(())
}

//! Live raw EEG signal viewer over an MQTT sample stream

use clap::Parser;
use mindflex_desktop::{RawPlotApp, RawViewerConfig};
use mindflex_telemetry::TelemetryConfig;

#[derive(Debug, Parser)]
#[command(name = "raw-plot", about = "Live raw EEG signal viewer")]
struct Args {
    /// MQTT broker host or address
    broker: String,

    /// MQTT broker port
    #[arg(long, default_value_t = mindflex_telemetry::config::DEFAULT_PORT)]
    port: u16,

    /// Topic carrying raw ADC samples
    #[arg(long, default_value = mindflex_telemetry::config::DEFAULT_TOPIC)]
    topic: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let telemetry = TelemetryConfig {
        host: args.broker,
        port: args.port,
        topic: args.topic,
        ..Default::default()
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1350.0, 375.0])
            .with_min_inner_size([700.0, 250.0]),
        ..Default::default()
    };

    println!("Streaming data...");
    eframe::run_native(
        "EEG Signal Over Time",
        options,
        Box::new(move |_cc| {
            let app = RawPlotApp::new(telemetry, RawViewerConfig::default())?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run native app: {}", e))?;

    Ok(())
}

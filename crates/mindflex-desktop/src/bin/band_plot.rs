//! Live EEG band-power viewer over an MQTT sample stream

use clap::Parser;
use mindflex_desktop::{BandPlotApp, ViewerConfig};
use mindflex_telemetry::TelemetryConfig;

#[derive(Debug, Parser)]
#[command(name = "band-plot", about = "Live EEG band-power and raw-signal viewer")]
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
            .with_inner_size([1500.0, 750.0])
            .with_min_inner_size([900.0, 450.0]),
        ..Default::default()
    };

    println!("Streaming data...");
    eframe::run_native(
        "TGAM1 MQTT Plot",
        options,
        Box::new(move |_cc| {
            let app = BandPlotApp::new(telemetry, ViewerConfig::default())?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run native app: {}", e))?;

    Ok(())
}

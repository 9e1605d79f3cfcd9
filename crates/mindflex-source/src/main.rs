//! Sine-wave signal source: publishes synthetic raw ADC samples over MQTT

use anyhow::Context;
use clap::Parser;
use mindflex_source::sine;
use mindflex_telemetry::{SamplePublisher, TelemetryConfig};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "sine-source", about = "Publish a synthetic sine-wave EEG signal over MQTT")]
struct Args {
    /// MQTT broker host or address
    broker: String,

    /// MQTT broker port
    #[arg(long, default_value_t = mindflex_telemetry::config::DEFAULT_PORT)]
    port: u16,

    /// Topic to publish raw ADC samples on
    #[arg(long, default_value = mindflex_telemetry::config::DEFAULT_TOPIC)]
    topic: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = TelemetryConfig {
        host: args.broker,
        port: args.port,
        topic: args.topic,
        ..Default::default()
    };

    let publisher = SamplePublisher::connect(&config).context("failed to connect publisher")?;

    println!("Streaming data... Ctrl-C to interrupt.");
    loop {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before unix epoch")?
            .as_secs_f64();

        let value = sine::sample_at(now);
        publisher.publish(value).context("publish failed")?;
        debug!(value, "published sample");

        std::thread::sleep(sine::PUBLISH_PERIOD);
    }
}

//! Mindflex-Telemetry: MQTT transport for raw EEG samples
//!
//! One topic, one payload shape: the decimal string encoding of a signed
//! 16-bit ADC reading. The publisher half is synchronous; the subscriber
//! half is a tokio task that fans samples out over a broadcast channel.

pub mod config;
pub mod payload;
pub mod publisher;
pub mod subscriber;

pub use config::TelemetryConfig;
pub use payload::{encode_sample, parse_sample};
pub use publisher::SamplePublisher;
pub use subscriber::{start_sample_stream, SampleStream, StreamCommand};

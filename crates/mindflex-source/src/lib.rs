//! Mindflex-Source: synthetic sine-wave signal for exercising the viewers

pub mod sine;

pub use sine::{sample_at, PUBLISH_PERIOD, SINE_AMPLITUDE};

//! Deterministic sine sample generation

use std::time::Duration;

/// Period between published samples
pub const PUBLISH_PERIOD: Duration = Duration::from_millis(80);

/// Peak ADC amplitude of the synthetic signal (half of full scale)
pub const SINE_AMPLITUDE: f64 = 16384.0;

/// Sample value for a given wall-clock timestamp in seconds:
/// `round(sin(t) * 16384)`, always within [-16384, 16384].
pub fn sample_at(seconds: f64) -> i16 {
    (seconds.sin() * SINE_AMPLITUDE).round() as i16
}

//! Viewer configuration

use mindflex_core::DEFAULT_MAX_MICROVOLTS;
use serde::{Deserialize, Serialize};

/// Configuration for the band-power viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Assumed sampling rate in Hz; also the analysis window and the raw
    /// display window length. The TGAM1 datasheet says 500 Hz; fewer
    /// samples per second leaves headroom for WiFi lag.
    pub sampling_rate: usize,
    /// Analysis/redraw tick period in milliseconds
    pub update_interval_ms: u64,
    /// Microvolt ceiling used for ADC scaling and the fixed y axis
    pub max_microvolts: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sampling_rate: 475,
            update_interval_ms: 1000,
            max_microvolts: DEFAULT_MAX_MICROVOLTS,
        }
    }
}

/// Configuration for the raw-signal viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawViewerConfig {
    /// Raw display window length in samples
    pub num_datapoints: usize,
    /// Redraw tick period in milliseconds
    pub update_interval_ms: u64,
    /// Microvolt ceiling used for ADC scaling and the fixed y axis
    pub max_microvolts: f32,
}

impl Default for RawViewerConfig {
    fn default() -> Self {
        Self {
            num_datapoints: 350,
            update_interval_ms: 1000,
            max_microvolts: DEFAULT_MAX_MICROVOLTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_viewer_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.sampling_rate, 475);
        assert_eq!(config.update_interval_ms, 1000);
        assert_eq!(config.max_microvolts, 100.0);
    }

    #[test]
    fn test_raw_viewer_defaults() {
        let config = RawViewerConfig::default();
        assert_eq!(config.num_datapoints, 350);
    }
}

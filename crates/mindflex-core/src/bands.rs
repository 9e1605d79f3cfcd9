//! EEG frequency band definitions

use core::fmt;
use serde::Serialize;

/// A named EEG frequency interval in Hz.
///
/// Bin membership is inclusive on both edges when aggregating an FFT
/// magnitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EegBand {
    pub name: &'static str,
    pub low_hz: f32,
    pub high_hz: f32,
}

/// The fixed band table, in display order (bar-chart column order is
/// deterministic because this is an ordered array, not a map).
pub const EEG_BANDS: [EegBand; 6] = [
    EegBand { name: "Low Delta", low_hz: 0.0, high_hz: 2.0 },
    EegBand { name: "High Delta", low_hz: 2.0, high_hz: 4.0 },
    EegBand { name: "Theta", low_hz: 4.0, high_hz: 8.0 },
    EegBand { name: "Alpha", low_hz: 8.0, high_hz: 12.0 },
    EegBand { name: "Beta", low_hz: 12.0, high_hz: 30.0 },
    EegBand { name: "Gamma", low_hz: 30.0, high_hz: 45.0 },
];

impl EegBand {
    /// Whether a frequency falls inside this band (inclusive edges).
    pub fn contains(&self, frequency_hz: f32) -> bool {
        frequency_hz >= self.low_hz && frequency_hz <= self.high_hz
    }
}

impl fmt::Display for EegBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{}Hz)", self.name, self.low_hz, self.high_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_order_is_stable() {
        let names: Vec<&str> = EEG_BANDS.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            ["Low Delta", "High Delta", "Theta", "Alpha", "Beta", "Gamma"]
        );
    }

    #[test]
    fn test_bands_cover_zero_to_45hz() {
        assert_eq!(EEG_BANDS[0].low_hz, 0.0);
        assert_eq!(EEG_BANDS[5].high_hz, 45.0);
        for pair in EEG_BANDS.windows(2) {
            assert_eq!(pair[0].high_hz, pair[1].low_hz);
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let alpha = EEG_BANDS[3];
        assert!(alpha.contains(8.0));
        assert!(alpha.contains(12.0));
        assert!(!alpha.contains(12.001));
    }
}

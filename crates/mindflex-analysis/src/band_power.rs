//! Rolling band-power estimation over the sample stream

use crate::spectrum::SpectrumAnalyzer;
use mindflex_core::{EegBand, MindflexResult, RollingBuffer, EEG_BANDS};
use serde::Serialize;

/// Mean FFT magnitude of one EEG band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandPower {
    pub band: EegBand,
    pub magnitude: f32,
}

/// One analysis tick's worth of band powers, in declared band order
#[derive(Debug, Clone, PartialEq)]
pub struct BandPowerFrame {
    pub powers: Vec<BandPower>,
}

/// Live band-power estimator.
///
/// Keeps a rolling window of the most recent `sampling_rate` microvolt
/// samples plus a fresh-sample counter. Samples arrive through
/// [`on_sample`](Self::on_sample) at the headset rate; an independent
/// timer calls [`on_tick`](Self::on_tick), which only runs the transform
/// once a full window of fresh samples has accumulated since the last
/// analysis. This decouples the sample rate from the redraw rate and
/// avoids recomputing the FFT on every single sample.
pub struct BandPowerEstimator {
    window: RollingBuffer,
    fresh_samples: usize,
    analyzer: SpectrumAnalyzer,
    bands: Vec<EegBand>,
}

impl BandPowerEstimator {
    /// Estimator over the standard EEG band table.
    pub fn new(sampling_rate: usize) -> Self {
        Self::with_bands(sampling_rate, EEG_BANDS.to_vec())
    }

    /// Estimator with a custom band table (kept in the given order).
    pub fn with_bands(sampling_rate: usize, bands: Vec<EegBand>) -> Self {
        BandPowerEstimator {
            window: RollingBuffer::new(sampling_rate),
            fresh_samples: 0,
            analyzer: SpectrumAnalyzer::new(sampling_rate, sampling_rate as f32),
            bands,
        }
    }

    /// Feed one scaled sample into the analysis window.
    pub fn on_sample(&mut self, microvolts: f32) {
        self.window.push(microvolts);
        if self.fresh_samples < self.window.capacity() {
            self.fresh_samples += 1;
        }
    }

    /// Analysis tick.
    ///
    /// Returns a new [`BandPowerFrame`] if a full window of fresh samples
    /// has arrived since the previous analysis, resetting the counter;
    /// otherwise `None`.
    pub fn on_tick(&mut self) -> MindflexResult<Option<BandPowerFrame>> {
        if self.fresh_samples < self.window.capacity() {
            return Ok(None);
        }

        let magnitudes = self.analyzer.magnitudes(&self.window.to_vec())?;

        let powers = self
            .bands
            .iter()
            .map(|band| {
                let mut sum = 0.0;
                let mut count = 0usize;
                for (bin, &magnitude) in magnitudes.iter().enumerate() {
                    if band.contains(self.analyzer.bin_frequency(bin)) {
                        sum += magnitude;
                        count += 1;
                    }
                }
                // A band narrower than the bin spacing matches no bins;
                // report zero rather than a NaN mean.
                let magnitude = if count == 0 { 0.0 } else { sum / count as f32 };
                BandPower {
                    band: *band,
                    magnitude,
                }
            })
            .collect();

        self.fresh_samples = 0;
        Ok(Some(BandPowerFrame { powers }))
    }

    /// How many fresh samples have arrived since the last analysis,
    /// saturating at the window length.
    pub fn fresh_samples(&self) -> usize {
        self.fresh_samples
    }

    /// The analysis window length (equals the assumed sampling rate).
    pub fn window_len(&self) -> usize {
        self.window.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn feed_tone(estimator: &mut BandPowerEstimator, frequency_hz: f32, count: usize) {
        let fs = estimator.window_len() as f32;
        for i in 0..count {
            let t = i as f32 / fs;
            estimator.on_sample((2.0 * PI * frequency_hz * t).sin());
        }
    }

    #[test]
    fn test_analysis_gated_until_window_is_fresh() {
        let mut estimator = BandPowerEstimator::new(32);
        feed_tone(&mut estimator, 4.0, 31);
        assert!(estimator.on_tick().unwrap().is_none());

        estimator.on_sample(0.0);
        assert!(estimator.on_tick().unwrap().is_some());

        // Counter was reset: the very next tick has nothing fresh.
        assert_eq!(estimator.fresh_samples(), 0);
        assert!(estimator.on_tick().unwrap().is_none());
    }

    #[test]
    fn test_in_band_tone_dominates_its_band() {
        let mut estimator = BandPowerEstimator::new(64);
        // 10 Hz sits inside Alpha (8-12 Hz) and nowhere else.
        feed_tone(&mut estimator, 10.0, 64);

        let frame = estimator.on_tick().unwrap().expect("window was fresh");
        let alpha = frame
            .powers
            .iter()
            .find(|p| p.band.name == "Alpha")
            .unwrap();
        for power in &frame.powers {
            if power.band.name != "Alpha" {
                assert!(
                    alpha.magnitude > power.magnitude,
                    "Alpha ({}) not above {} ({})",
                    alpha.magnitude,
                    power.band.name,
                    power.magnitude
                );
            }
        }
    }

    #[test]
    fn test_frame_preserves_declared_band_order() {
        let mut estimator = BandPowerEstimator::new(32);
        feed_tone(&mut estimator, 4.0, 32);

        let frame = estimator.on_tick().unwrap().unwrap();
        let names: Vec<&str> = frame.powers.iter().map(|p| p.band.name).collect();
        let expected: Vec<&str> = EEG_BANDS.iter().map(|b| b.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_band_with_no_bins_reports_zero() {
        // With fs = 16 the bins land on whole Hz; a band between 10 and
        // 11 Hz (exclusive of both bins) matches nothing.
        let narrow = EegBand {
            name: "Narrow",
            low_hz: 10.2,
            high_hz: 10.8,
        };
        let mut estimator = BandPowerEstimator::with_bands(16, vec![narrow]);
        feed_tone(&mut estimator, 4.0, 16);

        let frame = estimator.on_tick().unwrap().unwrap();
        assert_eq!(frame.powers.len(), 1);
        assert_eq!(frame.powers[0].magnitude, 0.0);
        assert!(!frame.powers[0].magnitude.is_nan());
    }

    #[test]
    fn test_powers_are_non_negative() {
        let mut estimator = BandPowerEstimator::new(64);
        feed_tone(&mut estimator, 25.0, 64);

        let frame = estimator.on_tick().unwrap().unwrap();
        for power in &frame.powers {
            assert!(power.magnitude >= 0.0);
        }
    }
}

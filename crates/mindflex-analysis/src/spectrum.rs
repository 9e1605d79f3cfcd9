//! Real-valued FFT magnitude spectra

use mindflex_core::{MindflexError, MindflexResult};
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// Forward real-to-complex FFT planned for a fixed window length.
///
/// A window of `len` real samples yields `len / 2 + 1` magnitude bins;
/// bin `i` corresponds to frequency `i * sampling_rate / len` Hz.
pub struct SpectrumAnalyzer {
    r2c: Arc<dyn RealToComplex<f32>>,
    len: usize,
    sampling_rate: f32,
}

impl SpectrumAnalyzer {
    /// Plan a transform for windows of `len` samples at `sampling_rate` Hz.
    pub fn new(len: usize, sampling_rate: f32) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(len);
        SpectrumAnalyzer {
            r2c,
            len,
            sampling_rate,
        }
    }

    /// Window length the transform was planned for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of magnitude bins produced per window.
    pub fn output_len(&self) -> usize {
        self.len / 2 + 1
    }

    /// Center frequency of a magnitude bin in Hz.
    pub fn bin_frequency(&self, bin: usize) -> f32 {
        bin as f32 * self.sampling_rate / self.len as f32
    }

    /// Compute the magnitude spectrum of one window.
    pub fn magnitudes(&self, samples: &[f32]) -> MindflexResult<Vec<f32>> {
        if samples.len() != self.len {
            return Err(MindflexError::WindowLengthMismatch {
                expected: self.len,
                actual: samples.len(),
            });
        }

        let mut input = samples.to_vec();
        let mut spectrum: Vec<Complex<f32>> = self.r2c.make_output_vec();
        self.r2c
            .process(&mut input, &mut spectrum)
            .map_err(|e| MindflexError::Spectrum {
                reason: e.to_string(),
            })?;

        Ok(spectrum.iter().map(|c| c.norm()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_output_length() {
        let analyzer = SpectrumAnalyzer::new(64, 64.0);
        assert_eq!(analyzer.output_len(), 33);
        let spectrum = analyzer.magnitudes(&vec![0.0; 64]).unwrap();
        assert_eq!(spectrum.len(), 33);
    }

    #[test]
    fn test_bin_frequency_resolution() {
        // One second of data: bin index equals frequency in Hz.
        let analyzer = SpectrumAnalyzer::new(475, 475.0);
        assert_eq!(analyzer.bin_frequency(0), 0.0);
        assert_eq!(analyzer.bin_frequency(10), 10.0);
    }

    #[test]
    fn test_pure_tone_peaks_at_its_bin() {
        let n = 64;
        let analyzer = SpectrumAnalyzer::new(n, n as f32);
        let samples: Vec<f32> = (0..n)
            .map(|i| (2.0 * PI * 10.0 * i as f32 / n as f32).sin())
            .collect();

        let spectrum = analyzer.magnitudes(&samples).unwrap();
        let peak_bin = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 10);
    }

    #[test]
    fn test_dc_signal_concentrates_in_bin_zero() {
        let analyzer = SpectrumAnalyzer::new(32, 32.0);
        let spectrum = analyzer.magnitudes(&vec![1.0; 32]).unwrap();
        assert!((spectrum[0] - 32.0).abs() < 1e-3);
        for &mag in &spectrum[1..] {
            assert!(mag < 1e-3);
        }
    }

    #[test]
    fn test_window_length_mismatch_is_an_error() {
        let analyzer = SpectrumAnalyzer::new(64, 64.0);
        assert!(matches!(
            analyzer.magnitudes(&[0.0; 16]),
            Err(MindflexError::WindowLengthMismatch { expected: 64, actual: 16 })
        ));
    }
}

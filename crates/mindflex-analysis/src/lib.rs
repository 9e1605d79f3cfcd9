//! Mindflex-Analysis: live EEG band-power estimation
//!
//! Real FFT magnitude spectra over a rolling sample window, aggregated
//! into per-band mean magnitudes for the bar-chart viewer.

pub mod band_power;
pub mod spectrum;

pub use band_power::{BandPower, BandPowerEstimator, BandPowerFrame};
pub use spectrum::SpectrumAnalyzer;

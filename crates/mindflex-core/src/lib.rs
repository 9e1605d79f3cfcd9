//! Mindflex-Core: Foundation types for MindFlex EEG streaming
//!
//! Shared building blocks for the publisher and viewer binaries: ADC
//! scaling, EEG band definitions, rolling sample windows and errors.

pub mod bands;
pub mod buffer;
pub mod error;
pub mod sample;

pub use bands::{EegBand, EEG_BANDS};
pub use buffer::RollingBuffer;
pub use error::{MindflexError, MindflexResult};
pub use sample::{adc_to_microvolts, DEFAULT_MAX_MICROVOLTS, MAX_ADC};

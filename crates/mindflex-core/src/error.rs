//! Error handling for the MindFlex stream utilities

use core::fmt;

/// Result type alias for MindFlex stream operations
pub type MindflexResult<T> = Result<T, MindflexError>;

/// Error type covering the telemetry and analysis operations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MindflexError {
    /// Message payload could not be parsed as a raw ADC sample
    MalformedPayload {
        /// The payload as received, lossily decoded for display
        payload: String,
    },

    /// Invalid configuration value
    InvalidConfig {
        /// Description of the configuration error
        reason: String,
    },

    /// MQTT transport failure (connect, subscribe, publish or poll)
    Transport {
        /// Underlying transport error description
        reason: String,
    },

    /// Spectral analysis failure
    Spectrum {
        /// Description of the FFT issue
        reason: String,
    },

    /// Window length does not match what the analyzer was planned for
    WindowLengthMismatch {
        /// Expected number of samples
        expected: usize,
        /// Actual number of samples
        actual: usize,
    },
}

impl fmt::Display for MindflexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MindflexError::MalformedPayload { payload } => {
                write!(f, "Malformed sample payload: {:?}", payload)
            }
            MindflexError::InvalidConfig { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
            MindflexError::Transport { reason } => {
                write!(f, "Transport error: {}", reason)
            }
            MindflexError::Spectrum { reason } => {
                write!(f, "Spectrum error: {}", reason)
            }
            MindflexError::WindowLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Window length mismatch: expected {} samples, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for MindflexError {}

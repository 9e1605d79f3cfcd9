//! Mindflex-Desktop: live EEG viewers over the MQTT sample stream

pub mod app;
pub mod config;
pub mod ui;

pub use app::{BandPlotApp, RawPlotApp};
pub use config::{RawViewerConfig, ViewerConfig};

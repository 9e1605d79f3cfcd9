//! Viewer application state and frame logic

use crate::config::{RawViewerConfig, ViewerConfig};
use crate::ui;
use mindflex_analysis::{BandPowerEstimator, BandPowerFrame};
use mindflex_core::RollingBuffer;
use mindflex_telemetry::{start_sample_stream, StreamCommand, TelemetryConfig};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};
use tracing::{error, warn};

/// Shared streaming state of both viewers.
///
/// Owns the tokio runtime and the subscriber handles. All buffers live on
/// the GUI thread; samples arrive through the broadcast channel and are
/// drained once per frame, so the receive path never touches a buffer the
/// render path is reading.
struct StreamState {
    runtime: tokio::runtime::Runtime,
    telemetry: TelemetryConfig,
    max_microvolts: f32,
    data_receiver: Option<broadcast::Receiver<f32>>,
    control_sender: Option<mpsc::Sender<StreamCommand>>,
    samples_received: u64,
    initialized: bool,
    closed: bool,
}

impl StreamState {
    fn new(telemetry: TelemetryConfig, max_microvolts: f32) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| anyhow::anyhow!("failed to create tokio runtime: {}", e))?;

        Ok(StreamState {
            runtime,
            telemetry,
            max_microvolts,
            data_receiver: None,
            control_sender: None,
            samples_received: 0,
            initialized: false,
            closed: false,
        })
    }

    /// Start the subscriber task (called on the first frame).
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        let telemetry = self.telemetry.clone();
        let max_microvolts = self.max_microvolts;
        let (data_receiver, control_sender) = self
            .runtime
            .block_on(async { start_sample_stream(telemetry, max_microvolts) });

        self.data_receiver = Some(data_receiver);
        self.control_sender = Some(control_sender);
        self.initialized = true;
    }

    /// Drain every sample that arrived since the previous frame.
    fn drain_samples(&mut self, mut on_sample: impl FnMut(f32)) {
        let Some(receiver) = self.data_receiver.as_mut() else {
            return;
        };

        loop {
            match receiver.try_recv() {
                Ok(uv) => {
                    self.samples_received += 1;
                    on_sample(uv);
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!("viewer lagged, skipped {} samples", skipped);
                }
                Err(_) => break,
            }
        }
    }

    /// On window close, tell the subscriber to disconnect. Terminal; the
    /// stream is not restarted.
    fn handle_close(&mut self, ctx: &egui::Context) {
        if self.closed || !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }

        if let Some(sender) = &self.control_sender {
            if let Err(e) = sender.try_send(StreamCommand::Shutdown) {
                error!("failed to send shutdown: {}", e);
            }
        }
        self.closed = true;
        println!("window closed");
    }
}

/// Band-power viewer: bar chart of per-band FFT magnitude next to the
/// rolling raw signal.
pub struct BandPlotApp {
    stream: StreamState,
    config: ViewerConfig,
    raw_window: RollingBuffer,
    estimator: BandPowerEstimator,
    latest_frame: Option<BandPowerFrame>,
    last_tick: Instant,
}

impl BandPlotApp {
    pub fn new(telemetry: TelemetryConfig, config: ViewerConfig) -> anyhow::Result<Self> {
        let stream = StreamState::new(telemetry, config.max_microvolts)?;

        Ok(BandPlotApp {
            raw_window: RollingBuffer::new(config.sampling_rate),
            estimator: BandPowerEstimator::new(config.sampling_rate),
            latest_frame: None,
            last_tick: Instant::now(),
            stream,
            config,
        })
    }

    /// Run the analysis tick once per update interval. The bar chart only
    /// changes when a full window of fresh samples has accumulated.
    fn maybe_analyze(&mut self) {
        if self.last_tick.elapsed() < Duration::from_millis(self.config.update_interval_ms) {
            return;
        }
        self.last_tick = Instant::now();

        match self.estimator.on_tick() {
            Ok(Some(frame)) => self.latest_frame = Some(frame),
            Ok(None) => {}
            Err(e) => error!("band analysis failed: {}", e),
        }
    }
}

impl eframe::App for BandPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.stream.initialize();

        let raw_window = &mut self.raw_window;
        let estimator = &mut self.estimator;
        self.stream.drain_samples(|uv| {
            raw_window.push(uv);
            estimator.on_sample(uv);
        });

        self.maybe_analyze();
        self.stream.handle_close(ctx);
        ctx.request_repaint();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Samples: {}", self.stream.samples_received));
                ui.separator();
                ui.label(format!(
                    "Window: {}/{}",
                    self.estimator.fresh_samples(),
                    self.estimator.window_len()
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                ui::band_power_plot(&mut columns[0], self.latest_frame.as_ref());
                ui::raw_signal_plot(
                    &mut columns[1],
                    &self.raw_window.to_vec(),
                    self.config.max_microvolts,
                );
            });
        });
    }
}

/// Raw-signal viewer: just the rolling line chart, no spectral analysis.
pub struct RawPlotApp {
    stream: StreamState,
    config: RawViewerConfig,
    raw_window: RollingBuffer,
}

impl RawPlotApp {
    pub fn new(telemetry: TelemetryConfig, config: RawViewerConfig) -> anyhow::Result<Self> {
        let stream = StreamState::new(telemetry, config.max_microvolts)?;

        Ok(RawPlotApp {
            raw_window: RollingBuffer::new(config.num_datapoints),
            stream,
            config,
        })
    }
}

impl eframe::App for RawPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.stream.initialize();

        let raw_window = &mut self.raw_window;
        self.stream.drain_samples(|uv| raw_window.push(uv));

        self.stream.handle_close(ctx);
        // No analysis to pace; redraw on the configured tick.
        ctx.request_repaint_after(Duration::from_millis(self.config.update_interval_ms));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::raw_signal_plot(ui, &self.raw_window.to_vec(), self.config.max_microvolts);
        });
    }
}

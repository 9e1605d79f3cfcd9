//! Subscriber task fanning out scaled samples for live visualization

use crate::config::TelemetryConfig;
use crate::payload::parse_sample;
use mindflex_core::{adc_to_microvolts, MindflexError, MindflexResult};
use rumqttc::{AsyncClient, Event, EventLoop, Packet, QoS};
use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

/// Room for roughly two seconds of samples at the headset rate
const SAMPLE_CHANNEL_CAPACITY: usize = 1024;

/// Commands for controlling the subscriber task
#[derive(Debug, Clone)]
pub enum StreamCommand {
    /// Disconnect and end the task (sent on window close)
    Shutdown,
}

/// MQTT subscriber that parses incoming payloads, scales them to
/// microvolts and broadcasts them to any number of viewers.
///
/// The task is the only place that touches the network; viewers drain the
/// broadcast receiver from their own thread, so no buffer is ever shared
/// between the receive path and the render path.
pub struct SampleStream {
    config: TelemetryConfig,
    max_microvolts: f32,
    client: AsyncClient,
    event_loop: EventLoop,
    data_sender: broadcast::Sender<f32>,
    control_receiver: mpsc::Receiver<StreamCommand>,
    control_sender: mpsc::Sender<StreamCommand>,
}

impl SampleStream {
    /// Create a new subscriber for the given broker.
    pub fn new(config: TelemetryConfig, max_microvolts: f32) -> Self {
        let options = config.mqtt_options("viewer");
        let (client, event_loop) = AsyncClient::new(options, 10);
        let (data_sender, _) = broadcast::channel(SAMPLE_CHANNEL_CAPACITY);
        let (control_sender, control_receiver) = mpsc::channel(8);

        SampleStream {
            config,
            max_microvolts,
            client,
            event_loop,
            data_sender,
            control_receiver,
            control_sender,
        }
    }

    /// Get a receiver for scaled microvolt samples.
    pub fn subscribe(&self) -> broadcast::Receiver<f32> {
        self.data_sender.subscribe()
    }

    /// Get control sender for shutting the stream down.
    pub fn control_handle(&self) -> mpsc::Sender<StreamCommand> {
        self.control_sender.clone()
    }

    /// Drive the MQTT event loop until shutdown or a transport fault.
    ///
    /// Malformed payloads are logged and dropped; transport errors are
    /// fatal and end the task (no retry, matching the source behavior).
    pub async fn run(mut self) -> MindflexResult<()> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            "connecting to MQTT message broker"
        );

        loop {
            tokio::select! {
                event = self.event_loop.poll() => {
                    match event {
                        Ok(Event::Incoming(Packet::ConnAck(_))) => {
                            info!(topic = %self.config.topic, "connected, subscribing");
                            self.client
                                .subscribe(&self.config.topic, QoS::AtMostOnce)
                                .await
                                .map_err(|e| MindflexError::Transport {
                                    reason: e.to_string(),
                                })?;
                        }
                        Ok(Event::Incoming(Packet::Publish(publish))) => {
                            match parse_sample(&publish.payload) {
                                Ok(adc) => {
                                    let uv = adc_to_microvolts(adc, self.max_microvolts);
                                    // Ignore send errors; no receiver just
                                    // means no viewer is attached yet.
                                    let _ = self.data_sender.send(uv);
                                }
                                Err(e) => {
                                    warn!("dropping sample: {}", e);
                                }
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("MQTT transport error: {}", e);
                            return Err(MindflexError::Transport {
                                reason: e.to_string(),
                            });
                        }
                    }
                }

                command = self.control_receiver.recv() => {
                    match command {
                        Some(StreamCommand::Shutdown) | None => {
                            info!("sample stream shutting down");
                            let _ = self.client.disconnect().await;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Start a sample stream in the background.
///
/// Must be called from within a tokio runtime. Returns the data receiver
/// and the control handle; the task itself logs and exits on fault.
pub fn start_sample_stream(
    config: TelemetryConfig,
    max_microvolts: f32,
) -> (broadcast::Receiver<f32>, mpsc::Sender<StreamCommand>) {
    let stream = SampleStream::new(config, max_microvolts);
    let data_receiver = stream.subscribe();
    let control_sender = stream.control_handle();

    tokio::spawn(async move {
        if let Err(e) = stream.run().await {
            error!("sample stream error: {}", e);
        }
    });

    (data_receiver, control_sender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_command_ends_the_task() {
        // Broker host that will never answer; shutdown must still win the
        // select before any connection is established.
        let stream = SampleStream::new(TelemetryConfig::for_host("203.0.113.1"), 100.0);
        let control = stream.control_handle();
        let task = tokio::spawn(stream.run());

        control.send(StreamCommand::Shutdown).await.unwrap();
        // The task must end promptly, whether via the command or an
        // earlier transport fault.
        tokio::time::timeout(std::time::Duration::from_secs(5), task)
            .await
            .expect("stream task did not shut down")
            .unwrap()
            .ok();
    }

    #[tokio::test]
    async fn test_subscribe_before_run_sees_no_backlog() {
        let stream = SampleStream::new(TelemetryConfig::default(), 100.0);
        let mut receiver = stream.subscribe();
        assert!(receiver.try_recv().is_err());
    }
}

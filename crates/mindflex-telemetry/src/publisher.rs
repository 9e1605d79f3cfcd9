//! Synchronous sample publisher

use crate::config::TelemetryConfig;
use crate::payload::encode_sample;
use mindflex_core::{MindflexError, MindflexResult};
use rumqttc::{Client, Event, Packet, QoS};
use std::thread::JoinHandle;
use tracing::{error, info};

/// Blocking MQTT publisher for raw ADC samples.
///
/// The MQTT network loop runs on a library-managed background thread; the
/// publish calls themselves are synchronous on the caller's thread. There
/// is no retry: once the network thread has died, every further publish
/// fails.
pub struct SamplePublisher {
    client: Client,
    topic: String,
    net_thread: JoinHandle<()>,
}

impl SamplePublisher {
    /// Connect to the broker and start the network loop.
    pub fn connect(config: &TelemetryConfig) -> MindflexResult<Self> {
        info!(host = %config.host, port = config.port, "connecting to MQTT message broker");

        let options = config.mqtt_options("source");
        let (client, mut connection) = Client::new(options, 10);

        let net_thread = std::thread::spawn(move || {
            for event in connection.iter() {
                match event {
                    Ok(Event::Incoming(Packet::ConnAck(_))) => {
                        info!("connected to MQTT message broker");
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!("MQTT connection error: {}", e);
                        break;
                    }
                }
            }
        });

        Ok(SamplePublisher {
            client,
            topic: config.topic.clone(),
            net_thread,
        })
    }

    /// Publish one raw ADC sample as its decimal payload at QoS 0.
    pub fn publish(&self, adc: i16) -> MindflexResult<()> {
        if self.net_thread.is_finished() {
            return Err(MindflexError::Transport {
                reason: "MQTT network loop has stopped".to_string(),
            });
        }

        self.client
            .publish(&self.topic, QoS::AtMostOnce, false, encode_sample(adc))
            .map_err(|e| MindflexError::Transport {
                reason: e.to_string(),
            })
    }

    /// Disconnect and wait for the network loop to finish.
    pub fn shutdown(self) -> MindflexResult<()> {
        self.client.disconnect().map_err(|e| MindflexError::Transport {
            reason: e.to_string(),
        })?;
        let _ = self.net_thread.join();
        Ok(())
    }
}

//! MQTT connection configuration

use rumqttc::MqttOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default broker port (matches the headset firmware config)
pub const DEFAULT_PORT: u16 = 1883;

/// Topic carrying raw ADC samples from the headset
pub const DEFAULT_TOPIC: &str = "MindFlex/data";

/// Connection parameters shared by the publisher and the viewers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Broker host name or address
    pub host: String,
    /// Broker port
    pub port: u16,
    /// Topic carrying the sample stream
    pub topic: String,
    /// MQTT keep-alive interval in seconds
    pub keep_alive_secs: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            topic: DEFAULT_TOPIC.to_string(),
            keep_alive_secs: 60,
        }
    }
}

impl TelemetryConfig {
    /// Configuration for a given broker host, defaults for everything else.
    pub fn for_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Build MQTT options for a client with the given role label.
    ///
    /// The process id is folded into the client id so several viewers can
    /// watch the same broker without session clashes.
    pub fn mqtt_options(&self, role: &str) -> MqttOptions {
        let client_id = format!("mindflex-{}-{}", role, std::process::id());
        let mut options = MqttOptions::new(client_id, self.host.clone(), self.port);
        options.set_keep_alive(Duration::from_secs(self.keep_alive_secs));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_firmware_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.port, 1883);
        assert_eq!(config.topic, "MindFlex/data");
        assert_eq!(config.keep_alive_secs, 60);
    }

    #[test]
    fn test_for_host_overrides_only_host() {
        let config = TelemetryConfig::for_host("broker.local");
        assert_eq!(config.host, "broker.local");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.topic, DEFAULT_TOPIC);
    }
}

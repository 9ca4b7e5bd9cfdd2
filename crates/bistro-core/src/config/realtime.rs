//! Realtime channel configuration.

use serde::{Deserialize, Serialize};

/// Settings for the realtime event channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// WebSocket endpoint of the backend event stream.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Internal buffer size for broadcast channels.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            channel_buffer_size: default_channel_buffer(),
        }
    }
}

fn default_endpoint() -> String {
    "ws://localhost:4000/ws".to_string()
}

fn default_channel_buffer() -> usize {
    256
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Webhook the page posts to when no other endpoint is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://narendra-sai-9092.app.n8n.cloud/webhook-test/d7d09f23-1436-4792-9b8b-a6ea389ffb7e";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Absolute http(s) URL that receives `POST {"text": ...}`.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw and spinner interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a toast stays on screen in milliseconds (default: 5000).
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Toasts visible at once (default: 1).
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_duration_ms() -> u64 {
    5000
}

fn default_max_toasts() -> usize {
    1
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            max_toasts: default_max_toasts(),
        }
    }
}

//! Settings of a sync session.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{mirror::DEFAULT_GUARD_WINDOW, Error};

/// Settings for a client of the conversion endpoint. Every field has a
/// default, so a configuration file only needs the settings it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL of the conversion endpoint.
    pub endpoint: String,
    /// How long edits are ignored after a state is applied, in milliseconds.
    pub guard_window_ms: u64,
    /// How long to wait for the endpoint to answer, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("http://127.0.0.1:8000{}", crate::service::CONVERT_PATH),
            guard_window_ms: DEFAULT_GUARD_WINDOW.as_millis() as u64,
            timeout_ms: 10_000,
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The suppression window as a [`Duration`].
    pub fn guard_window(&self) -> Duration {
        Duration::from_millis(self.guard_window_ms)
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/convert");
        assert_eq!(config.guard_window(), Duration::from_millis(50));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"guard_window_ms": 20}"#).unwrap();
        assert_eq!(config.guard_window_ms, 20);
        assert_eq!(config.endpoint, ClientConfig::default().endpoint);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            ClientConfig::load("/nonexistent/colorsync.json"),
            Err(Error::Io(_))
        ));
    }
}

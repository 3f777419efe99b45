//! Remote layer configuration loaded from environment variables.
//!
//! All settings have defaults so the client can start with zero
//! configuration: with no server URL the facade runs fully simulated.

use std::time::Duration;

use hearth_shared::constants::{SIM_DELAY, SIM_MESSAGE_DELAY};

/// Configuration for the remote access facade.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend service.
    /// Env: `HEARTH_SERVER_URL`
    /// Default: none (fully simulated mode).
    pub server_url: Option<String>,

    /// Whether a failed remote sign-in or family create/join silently
    /// substitutes a locally simulated success.
    /// Env: `HEARTH_OFFLINE_FALLBACK` (true/false)
    /// Default: `true`.
    pub offline_fallback: bool,

    /// Artificial latency applied by the simulated backend.  Tests set this
    /// to zero.
    pub simulated_delay: Duration,

    /// Shorter artificial latency applied to simulated message sends.
    pub simulated_message_delay: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            offline_fallback: true,
            simulated_delay: SIM_DELAY,
            simulated_message_delay: SIM_MESSAGE_DELAY,
        }
    }
}

impl RemoteConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("HEARTH_SERVER_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if !url.is_empty() {
                config.server_url = Some(url);
            }
        }

        if let Ok(val) = std::env::var("HEARTH_OFFLINE_FALLBACK") {
            config.offline_fallback = val != "false" && val != "0";
        }

        config
    }

    /// A config with no artificial latency, for tests.
    pub fn instant() -> Self {
        Self {
            simulated_delay: Duration::ZERO,
            simulated_message_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_simulated_with_fallback() {
        let config = RemoteConfig::default();
        assert!(config.server_url.is_none());
        assert!(config.offline_fallback);
        assert_eq!(config.simulated_delay, Duration::from_secs(1));
        assert_eq!(config.simulated_message_delay, Duration::from_millis(500));
    }

    #[test]
    fn instant_config_has_no_delay() {
        let config = RemoteConfig::instant();
        assert_eq!(config.simulated_delay, Duration::ZERO);
        assert_eq!(config.simulated_message_delay, Duration::ZERO);
    }
}

use crate::{
    ConfigError, ConfigErrorResult, MAX_POLL_SECS, MIN_CONVERSATIONS_POLL_SECS,
    MIN_MESSAGES_POLL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Refresh intervals for the messaging views
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Conversation list refresh, seconds
    pub conversations_secs: u64,
    /// Open thread refresh, seconds
    pub messages_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            conversations_secs: MIN_CONVERSATIONS_POLL_SECS,
            messages_secs: MIN_MESSAGES_POLL_SECS,
        }
    }
}

impl PollingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "polling.conversations_secs",
            self.conversations_secs,
            MIN_CONVERSATIONS_POLL_SECS,
        )?;
        check_range(
            "polling.messages_secs",
            self.messages_secs,
            MIN_MESSAGES_POLL_SECS,
        )
    }

    /// Conversation refresh interval, never below the floor
    pub fn conversations_interval(&self) -> Duration {
        Duration::from_secs(self.conversations_secs.max(MIN_CONVERSATIONS_POLL_SECS))
    }

    /// Open thread refresh interval, never below the floor
    pub fn messages_interval(&self) -> Duration {
        Duration::from_secs(self.messages_secs.max(MIN_MESSAGES_POLL_SECS))
    }
}

fn check_range(key: &str, value: u64, min: u64) -> ConfigErrorResult<()> {
    if value < min || value > MAX_POLL_SECS {
        return Err(ConfigError::polling(format!(
            "{key} must be {min}-{MAX_POLL_SECS}, got {value}"
        )));
    }
    Ok(())
}

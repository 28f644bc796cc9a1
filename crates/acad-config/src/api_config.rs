use crate::{ConfigError, ConfigErrorResult, DEFAULT_DEVELOPMENT_URL, DEFAULT_PRODUCTION_URL};

use std::str::FromStr;

use serde::Deserialize;

/// Which back-office deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    Development,
    #[default]
    Production,
}

impl FromStr for ApiMode {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::api(format!(
                "api.mode must be development or production, got {s}"
            ))),
        }
    }
}

/// REST endpoint selection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub mode: ApiMode,
    pub development_url: String,
    pub production_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mode: ApiMode::default(),
            development_url: DEFAULT_DEVELOPMENT_URL.to_string(),
            production_url: DEFAULT_PRODUCTION_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Base URL for the active mode, without a trailing slash
    pub fn base_url(&self) -> &str {
        let url = match self.mode {
            ApiMode::Development => &self.development_url,
            ApiMode::Production => &self.production_url,
        };
        url.trim_end_matches('/')
    }

    /// Point the active mode at `url` (command-line `--server`)
    pub fn override_base_url(&mut self, url: impl Into<String>) {
        match self.mode {
            ApiMode::Development => self.development_url = url.into(),
            ApiMode::Production => self.production_url = url.into(),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (key, url) in [
            ("api.development_url", &self.development_url),
            ("api.production_url", &self.production_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::api(format!(
                    "{key} must start with http:// or https://, got {url}"
                )));
            }
        }
        Ok(())
    }
}

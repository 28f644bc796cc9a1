use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, PollingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub polling: PollingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ACAD_CONFIG_DIR env var, else use ./.acad/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ACAD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ACAD_CONFIG_DIR env var > ./.acad/ > ~/.acad/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        match std::env::current_dir() {
            Ok(cwd) => Ok(cwd.join(CONFIG_DIR_NAME)),
            Err(_) => dirs::home_dir()
                .map(|home| home.join(CONFIG_DIR_NAME))
                .ok_or(ConfigError::NoHomeDir),
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.polling.validate()?;
        Ok(())
    }

    /// Absolute path of the persisted session token.
    pub fn token_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(self.session.token_path(&config_dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };
        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        Ok(Some(log_dir.join(filename)))
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!("  api: {:?} -> {}", self.api.mode, self.api.base_url());
        debug!("  session: {}", self.session.token_file);
        debug!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        debug!(
            "  polling: conversations={}s, messages={}s",
            self.polling.conversations_secs, self.polling.messages_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_parse("ACAD_API_MODE", &mut self.api.mode);
        Self::apply_env_string("ACAD_API_DEVELOPMENT_URL", &mut self.api.development_url);
        Self::apply_env_string("ACAD_API_PRODUCTION_URL", &mut self.api.production_url);

        // Session
        Self::apply_env_string("ACAD_SESSION_TOKEN_FILE", &mut self.session.token_file);

        // Logging
        Self::apply_env_parse("ACAD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ACAD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ACAD_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("ACAD_LOG_DIR", &mut self.logging.dir);

        // Polling
        Self::apply_env_parse(
            "ACAD_POLL_CONVERSATIONS_SECS",
            &mut self.polling.conversations_secs,
        );
        Self::apply_env_parse("ACAD_POLL_MESSAGES_SECS", &mut self.polling.messages_secs);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

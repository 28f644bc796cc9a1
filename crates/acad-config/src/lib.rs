mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod polling_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::{ApiConfig, ApiMode};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use polling_config::PollingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "ACAD_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".acad";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_DEVELOPMENT_URL: &str = "http://localhost:5000/api";
const DEFAULT_PRODUCTION_URL: &str = "https://api.academy-desk.app/api";
const DEFAULT_TOKEN_FILE: &str = "session.token";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

// Polling floors: conversations every 5s, open thread every 3s
pub const MIN_CONVERSATIONS_POLL_SECS: u64 = 5;
pub const MIN_MESSAGES_POLL_SECS: u64 = 3;
pub const MAX_POLL_SECS: u64 = 300;

use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_FILE};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the bearer token survives between runs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Token file, relative to the config directory
    pub token_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_file: DEFAULT_TOKEN_FILE.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_file.trim().is_empty() {
            return Err(ConfigError::session("session.token_file cannot be empty"));
        }

        let path = Path::new(&self.token_file);
        if path.is_absolute() || self.token_file.contains("..") {
            return Err(ConfigError::session(
                "session.token_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn token_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.token_file)
    }
}

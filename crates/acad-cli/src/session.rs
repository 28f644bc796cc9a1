use crate::submit_guard::SubmitGuards;
use crate::{Client, ClientError, ClientResult};

use acad_config::{Config, ConfigErrorResult};
use acad_core::User;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

/// Persisted bearer token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token; a missing or blank file means no session
    pub fn load(&self) -> ClientResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.session_error(e)),
        }
    }

    pub fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.session_error(e))?;
        }
        write_private(&self.path, token).map_err(|e| self.session_error(e))
    }

    /// Remove the stored token; clearing an absent file is not an error
    pub fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.session_error(e)),
        }
    }

    fn session_error(&self, source: std::io::Error) -> ClientError {
        ClientError::Session {
            path: self.path.clone(),
            source,
        }
    }
}

/// Write `contents` readable by the owner only
#[cfg(unix)]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.write_all(contents.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    std::fs::write(path, contents)
}

/// Everything a command needs: configuration, the API client and the
/// signed-in user
pub struct AppContext {
    pub config: Config,
    pub client: Client,
    pub store: TokenStore,
    pub guards: SubmitGuards,
    current_user: Option<User>,
}

impl AppContext {
    /// Build from configuration, pointing the client at the configured API
    pub fn new(config: Config) -> ConfigErrorResult<Self> {
        let token_path = config.token_path()?;
        let client = Client::new(config.api.base_url());
        Ok(Self::with_client(config, client, TokenStore::new(token_path)))
    }

    /// Build with an explicit client and token store.
    ///
    /// Submission locks live next to the token, so contexts sharing a
    /// configuration directory exclude each other.
    pub fn with_client(config: Config, client: Client, store: TokenStore) -> Self {
        let guards = match store.path().parent() {
            Some(dir) => SubmitGuards::in_dir(dir),
            None => SubmitGuards::default(),
        };

        Self {
            config,
            client,
            store,
            guards,
            current_user: None,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Resume a persisted session.
    ///
    /// Returns the signed-in user, or `None` when there is no stored token or
    /// the server rejected it (in which case the stored token is removed).
    pub async fn restore(&mut self) -> ClientResult<Option<&User>> {
        let Some(token) = self.store.load()? else {
            debug!("No stored session at {}", self.store.path().display());
            return Ok(None);
        };

        self.client.set_token(Some(token));

        match self.client.current_user().await {
            Ok(user) => {
                debug!("Restored session for {}", user.name);
                self.current_user = Some(user);
                Ok(self.current_user.as_ref())
            }
            Err(e) if e.is_unauthorized() => {
                warn!("Stored session is no longer valid; signing out");
                self.clear_session()?;
                Ok(None)
            }
            Err(e) => {
                self.client.set_token(None);
                Err(e)
            }
        }
    }

    /// Sign in and persist the returned token
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<&User> {
        let response = self.client.login(email, password).await?;
        self.store.save(&response.token)?;
        self.client.set_token(Some(response.token));
        info!("Signed in as {}", response.user.name);
        Ok(self.current_user.insert(response.user))
    }

    /// Forget the session locally and on disk
    pub fn logout(&mut self) -> ClientResult<()> {
        self.clear_session()?;
        info!("Signed out");
        Ok(())
    }

    #[track_caller]
    pub fn require_user(&self) -> ClientResult<&User> {
        self.current_user
            .as_ref()
            .ok_or_else(ClientError::not_authenticated)
    }

    /// Manager-only screens refuse other roles before calling the server
    #[track_caller]
    pub fn require_manager(&self) -> ClientResult<&User> {
        let user = self.require_user()?;
        if !user.role.is_manager() {
            return Err(ClientError::forbidden(format!(
                "{} role cannot access manager features",
                user.role
            )));
        }
        Ok(user)
    }

    #[track_caller]
    pub fn require_fee_collector(&self) -> ClientResult<&User> {
        let user = self.require_user()?;
        if !user.role.can_collect_fees() {
            return Err(ClientError::forbidden(format!(
                "{} role cannot collect fees",
                user.role
            )));
        }
        Ok(user)
    }

    fn clear_session(&mut self) -> ClientResult<()> {
        self.client.set_token(None);
        self.current_user = None;
        self.store.clear()
    }
}

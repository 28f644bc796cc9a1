use crate::{ClientError, ClientResult};

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime};

use log::{debug, warn};

/// A lock file older than this belongs to a process that died mid-submission
pub const STALE_LOCK_AGE: Duration = Duration::from_secs(120);

/// Rejects a second submission of the same kind while one is in flight.
///
/// The in-memory flag covers one process. With a lock directory the guard
/// also claims `<dir>/<action>.lock`, so every `acad` process sharing that
/// configuration directory sees the same submission.
#[derive(Debug, Clone)]
pub struct SubmitGuard {
    action: &'static str,
    in_flight: Arc<AtomicBool>,
    lock_path: Option<PathBuf>,
}

impl SubmitGuard {
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            in_flight: Arc::new(AtomicBool::new(false)),
            lock_path: None,
        }
    }

    /// Guard that also holds a lock file under `dir`
    pub fn with_lock_dir(action: &'static str, dir: &Path) -> Self {
        let file_name = format!("{}.lock", action.replace(' ', "-"));
        Self {
            lock_path: Some(dir.join(file_name)),
            ..Self::new(action)
        }
    }

    /// Claim the guard; the returned permit releases it on drop
    #[track_caller]
    pub fn try_acquire(&self) -> ClientResult<SubmitPermit> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejected duplicate {} submission", self.action);
            return Err(ClientError::duplicate_submission(self.action));
        }

        let permit = SubmitPermit {
            in_flight: Arc::clone(&self.in_flight),
            lock_path: None,
        };

        match self.lock_path {
            Some(ref path) => self.claim_lock_file(path, permit),
            None => Ok(permit),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn lock_path(&self) -> Option<&Path> {
        self.lock_path.as_deref()
    }

    #[track_caller]
    fn claim_lock_file(&self, path: &Path, mut permit: SubmitPermit) -> ClientResult<SubmitPermit> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| lock_error(path, e))?;
        }

        if create_lock_file(path).map_err(|e| lock_error(path, e))? {
            permit.lock_path = Some(path.to_path_buf());
            return Ok(permit);
        }

        if is_stale(path) {
            warn!("Removing stale {} lock at {}", self.action, path.display());
            if let Err(e) = std::fs::remove_file(path)
                && e.kind() != ErrorKind::NotFound
            {
                return Err(lock_error(path, e));
            }
            if create_lock_file(path).map_err(|e| lock_error(path, e))? {
                permit.lock_path = Some(path.to_path_buf());
                return Ok(permit);
            }
        }

        warn!(
            "Rejected duplicate {} submission; {} is held by another process",
            self.action,
            path.display()
        );
        Err(ClientError::duplicate_submission(self.action))
    }
}

/// Create the lock file exclusively. `Ok(false)` means it already exists.
fn create_lock_file(path: &Path) -> std::io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            writeln!(file, "{}", std::process::id())?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

fn is_stale(path: &Path) -> bool {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age > STALE_LOCK_AGE)
}

fn lock_error(path: &Path, source: std::io::Error) -> ClientError {
    ClientError::Session {
        path: path.to_path_buf(),
        source,
    }
}

/// Held for the duration of a submission
#[derive(Debug)]
pub struct SubmitPermit {
    in_flight: Arc<AtomicBool>,
    lock_path: Option<PathBuf>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        if let Some(ref path) = self.lock_path
            && let Err(e) = std::fs::remove_file(path)
        {
            debug!("Could not remove lock {}: {}", path.display(), e);
        }
        self.in_flight.store(false, Ordering::Release);
    }
}

/// One guard per protected submission kind
#[derive(Debug, Clone)]
pub struct SubmitGuards {
    pub bulk_assign: SubmitGuard,
    pub payment: SubmitGuard,
    pub task_assign: SubmitGuard,
}

impl SubmitGuards {
    /// Guards whose lock files live in `dir`, shared by every process using it
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            bulk_assign: SubmitGuard::with_lock_dir("bulk assign", dir),
            payment: SubmitGuard::with_lock_dir("payment", dir),
            task_assign: SubmitGuard::with_lock_dir("task assignment", dir),
        }
    }
}

impl Default for SubmitGuards {
    fn default() -> Self {
        Self {
            bulk_assign: SubmitGuard::new("bulk assign"),
            payment: SubmitGuard::new("payment"),
            task_assign: SubmitGuard::new("task assignment"),
        }
    }
}

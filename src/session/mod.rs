//! Persisted sign-in session.
//!
//! The session is an explicit object rather than ambient global state. It is
//! loaded at startup and saved on login, role switch and logout.

mod user;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

pub use user::{demo_users, User, UserRole, DEMO_PASSWORD};

use crate::config;

/// Name of the session file inside the config directory.
const SESSION_FILE: &str = "session.json";

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Email or password did not match a known account.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The operation needs a signed-in user.
    #[error("no active session")]
    NotSignedIn,

    /// The session directory could not be located.
    #[error("could not determine session directory: {0}")]
    NoDirectory(#[from] config::ConfigError),

    /// Reading or writing the session file failed.
    #[error("session file error: {0}")]
    Io(#[from] io::Error),

    /// The session file exists but is not valid.
    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Loads and saves the signed-in user.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    user: Option<User>,
}

impl SessionStore {
    /// Open the store in the default config directory.
    ///
    /// Nothing is read until [`SessionStore::load`] is called.
    pub fn open() -> Result<Self> {
        let dir = config::config_dir()?;
        Ok(Self::at(dir.join(SESSION_FILE)))
    }

    /// Open a store backed by a specific file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            user: None,
        }
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the session file.
    ///
    /// A missing file means nobody is signed in. A corrupt file is an error.
    pub fn load(&mut self) -> Result<Option<&User>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session file");
                self.user = None;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let user: User = serde_json::from_str(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Corrupt session file");
            e
        })?;
        debug!(email = %user.email, role = %user.role, "Session loaded");
        self.user = Some(user);
        Ok(self.user.as_ref())
    }

    /// Sign in with a demo account and persist the session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        let user = User::authenticate(email, password).ok_or_else(|| {
            warn!(email, "Login rejected");
            SessionError::InvalidCredentials
        })?;
        info!(email = %user.email, role = %user.role, "Logged in");
        self.save(&user)?;
        Ok(&*self.user.insert(user))
    }

    /// Sign out and remove the session file.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "Logged out");
        }
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Change the signed-in user's role and persist it.
    pub fn switch_role(&mut self, role: UserRole) -> Result<&User> {
        let updated = self
            .user
            .as_ref()
            .ok_or(SessionError::NotSignedIn)?
            .with_role(role);
        info!(email = %updated.email, role = %role, "Role switched");
        self.save(&updated)?;
        Ok(&*self.user.insert(updated))
    }

    fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}

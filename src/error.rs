//! Application-level error type.
//!
//! Collects the per-module errors and maps each one to a message that can
//! be shown in a toast or printed by the CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::Dataset;
use crate::session::{SessionError, UserRole};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Session(#[from] SessionError),

    /// The current role may not open a dataset.
    #[error("{role} users cannot open {dataset}")]
    Unauthorized { role: UserRole, dataset: Dataset },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// A short, non-technical message for the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find a configuration directory.".to_string()
                }
                ConfigError::CreateDirError(_) | ConfigError::WriteError(_) => {
                    "Could not save configuration. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => "Could not read the configuration file.".to_string(),
                ConfigError::ParseError(_) => {
                    "The configuration file is not valid TOML.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Session(e) => match e {
                SessionError::InvalidCredentials => "Invalid email or password.".to_string(),
                SessionError::NotSignedIn => "You are not signed in.".to_string(),
                SessionError::NoDirectory(_) => {
                    "Could not find a directory for the session file.".to_string()
                }
                SessionError::Io(_) => "Could not read or write the session file.".to_string(),
                SessionError::Corrupt(_) => "The saved session is unreadable.".to_string(),
            },
            AppError::Unauthorized { role, dataset } => format!(
                "The {} role cannot see {}.",
                role.label(),
                dataset.title()
            ),
            AppError::Io(_) => "A file operation failed. Check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Errors that stop the program instead of showing a toast.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            AppError::Config(_)
                | AppError::Session(SessionError::Corrupt(_))
                | AppError::Session(SessionError::NoDirectory(_))
                | AppError::Terminal(_)
        )
    }

    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix or remove config.toml in the LedgerDesk config directory.")
            }
            AppError::Session(SessionError::InvalidCredentials) => {
                Some("Demo accounts: office@demo.com or client@demo.com, password demo123.")
            }
            AppError::Session(SessionError::NotSignedIn) => {
                Some("Run 'ledgerdesk login <email> --password <password>'.")
            }
            AppError::Session(SessionError::Corrupt(_)) => {
                Some("Run 'ledgerdesk logout' to discard the saved session.")
            }
            AppError::Unauthorized { .. } => {
                Some("Switch role with 'ledgerdesk switch-role office'.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

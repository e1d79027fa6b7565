//! Error types for the Buddify shell

use thiserror::Error;

/// Errors raised by an auth context
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Logout failed: {0}")]
    LogoutFailed(String),
}

/// Errors surfaced by the navigation controller
///
/// The controller's own transitions are total; the only failure it can
/// report is one delegated to the auth context.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Result type alias using NavError
pub type NavResult<T> = Result<T, NavError>;

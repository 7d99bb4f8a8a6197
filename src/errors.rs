//! Shared error types for the application.
//!
//! The scoring core itself is total and never returns these; they cover the
//! edges: reading snapshots and config files, CLI input and notification
//! delivery.

use std::path::PathBuf;
use thiserror::Error;

use crate::integrations::Channel;

#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller supplied input that cannot be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A notification or ticketing channel rejected a request
    #[error("Integration error ({channel}): {message}")]
    Integration { channel: Channel, message: String },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an I/O error with the path that produced it
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    pub fn integration(channel: Channel, message: impl Into<String>) -> Self {
        Self::Integration {
            channel,
            message: message.into(),
        }
    }

    /// Errors the user can fix by changing input or configuration
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::InvalidInput(_) | Self::Json(_) | Self::Toml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_with_path_keeps_path_and_source() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "/tmp/snapshot.json",
        );

        match &err {
            Error::FileSystem { path, source, .. } => {
                assert_eq!(path.as_deref(), Some(std::path::Path::new("/tmp/snapshot.json")));
                assert!(source.is_some());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(err.to_string().contains("/tmp/snapshot.json"));
        assert!(!err.is_user_fixable());
    }

    #[test]
    fn integration_error_names_channel() {
        let err = Error::integration(Channel::Slack, "webhook rejected");
        assert_eq!(err.to_string(), "Integration error (slack): webhook rejected");
    }

    #[test]
    fn parse_errors_are_user_fixable() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.is_user_fixable());
    }
}

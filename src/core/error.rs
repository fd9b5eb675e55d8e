//! Error types for the logger system

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink sync failed while constructing the logger
    #[error("Failed to sync sink '{sink}': {source}")]
    Sync {
        sink: String,
        #[source]
        source: io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a sink sync error
    pub fn sync(sink: impl Into<String>, source: io::Error) -> Self {
        LoggerError::Sync {
            sink: sink.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// The underlying IO error, if this error wraps one
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            LoggerError::Sync { source, .. } => Some(source),
            LoggerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Whether a sync failure is expected for a non-syncable stream.
///
/// Consoles and pipes reject `fsync` with `EINVAL` or `ENOTTY`; those are
/// not failures of the sink.
pub(crate) fn is_ignorable_sync_error(err: &io::Error) -> bool {
    #[cfg(unix)]
    {
        matches!(err.raw_os_error(), Some(code) if code == libc::EINVAL || code == libc::ENOTTY)
    }

    #[cfg(not(unix))]
    {
        err.kind() == io::ErrorKind::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("EncoderConfig", "empty key");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = LoggerError::sync("stdout", io_err);
        assert!(matches!(err, LoggerError::Sync { .. }));
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("EncoderConfig", "message key must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for EncoderConfig: message key must not be empty"
        );

        let err = LoggerError::sync("stdout", io::Error::other("disk gone"));
        assert_eq!(err.to_string(), "Failed to sync sink 'stdout': disk gone");
    }

    #[cfg(unix)]
    #[test]
    fn test_ignorable_sync_errors() {
        assert!(is_ignorable_sync_error(&io::Error::from_raw_os_error(libc::EINVAL)));
        assert!(is_ignorable_sync_error(&io::Error::from_raw_os_error(libc::ENOTTY)));
        assert!(!is_ignorable_sync_error(&io::Error::from_raw_os_error(libc::EIO)));
        assert!(!is_ignorable_sync_error(&io::Error::new(
            io::ErrorKind::InvalidInput,
            "not an os error"
        )));
    }
}

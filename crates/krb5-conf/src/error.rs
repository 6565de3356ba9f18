//! Error types for krb5-conf

use std::path::PathBuf;

/// Result type for krb5-conf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing a krb5.conf
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing to the sink failed. Holds the sink's own error unchanged.
    #[error("Failed to write krb5.conf: {0}")]
    Write(#[from] std::io::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    Lock { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::Write(source) | Self::Io { source, .. } => Some(source),
            Self::Lock { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_write_error_keeps_source() {
        let err = Error::from(std::io::Error::new(ErrorKind::WriteZero, "disk full"));
        assert_eq!(err.to_string(), "Failed to write krb5.conf: disk full");
        assert_eq!(err.io_error().map(|e| e.kind()), Some(ErrorKind::WriteZero));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io(
            "/etc/krb5.conf",
            std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error at /etc/krb5.conf: denied");
    }

    #[test]
    fn test_lock_error_has_no_io_source() {
        let err = Error::Lock {
            path: PathBuf::from("/tmp/krb5.conf"),
        };
        assert!(err.io_error().is_none());
    }
}

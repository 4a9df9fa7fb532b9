use std::error::Error;
use thiserror::Error;

/// Result alias for football store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a football store, whatever database sits behind it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{backend} storage unavailable: {source}")]
    Unavailable {
        /// Short backend label used in logs, e.g. `mongodb`.
        backend: &'static str,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap a backend failure, tagging it with the backend label.
    pub fn unavailable(backend: &'static str, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            backend,
            source: Box::new(source),
        }
    }

    /// Label of the backend that failed.
    pub fn backend(&self) -> &'static str {
        match self {
            StorageError::Unavailable { backend, .. } => backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_backend_and_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "ping timed out");
        let err = StorageError::unavailable("mongodb", cause);
        assert_eq!(err.backend(), "mongodb");
        assert_eq!(err.to_string(), "mongodb storage unavailable: ping timed out");
        assert!(err.source().is_some());
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarlotError {
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Dealer not found: {0}")]
    DealerNotFound(String),

    #[error("Car not found: {0}")]
    VehicleNotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("No active session. Log in with `carlot login <dealer>` first")]
    NoActiveSession,

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt document {}: {source}", .path.display())]
    CorruptDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

/// Coarse grouping of errors, stable across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    NotFound,
    Conflict,
    Storage,
    Usage,
}

impl CarlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CarlotError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            CarlotError::DealerNotFound(_) | CarlotError::VehicleNotFound(_) => {
                ErrorKind::NotFound
            }
            CarlotError::Conflict(_) => ErrorKind::Conflict,
            CarlotError::Io(_)
            | CarlotError::CorruptDocument { .. }
            | CarlotError::Serialization(_) => ErrorKind::Storage,
            CarlotError::NoActiveSession | CarlotError::Api(_) => ErrorKind::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, CarlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_share_the_not_found_kind() {
        assert_eq!(
            CarlotError::DealerNotFound("x".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CarlotError::VehicleNotFound("ABC-123".into()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn corrupt_document_is_a_storage_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CarlotError::CorruptDocument {
            path: PathBuf::from("Data/Dealers.json"),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().starts_with("Corrupt document Data/Dealers.json"));
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Player store at {path} is corrupt: {message}")]
    CorruptStore { path: PathBuf, message: String },

    #[error("Player {username:?} points at store index {index}, but the store holds {len} players")]
    StaleIndex {
        username: String,
        index: usize,
        len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if input was closed while a prompt was waiting
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }

    /// Check if this error came from the persisted player store
    pub fn is_storage(&self) -> bool {
        match self {
            Error::CorruptStore { .. } | Error::StaleIndex { .. } | Error::Json(_) => true,
            Error::Io(_) => !self.is_eof(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_store_file_is_not_found() {
        let err: Error = std::fs::read_to_string("/nonexistent/numguess/players.json")
            .unwrap_err()
            .into();
        assert!(err.is_not_found());
        assert!(err.is_storage());

        let denied = Error::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "players.json",
        ));
        assert!(!denied.is_not_found());
        assert!(denied.is_storage());
    }

    #[test]
    fn test_error_eof_is_not_storage() {
        let err = Error::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
        assert!(err.is_eof());
        assert!(!err.is_storage());
    }

    #[test]
    fn test_corrupt_store_is_storage() {
        let err = Error::CorruptStore {
            path: PathBuf::from("players.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.is_storage());
        assert!(err.to_string().contains("players.json"));
    }
}

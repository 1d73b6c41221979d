//! Error types for the image store

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum StoreError {
    Io(Box<io::Error>),
}

impl StoreError {
    /// True when the underlying file did not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::Io(err) => err.kind() == io::ErrorKind::NotFound,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err.as_ref()),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = StoreError::from(io::Error::other("disk full"));
        assert_eq!(format!("{}", err), "IO error: disk full");
    }

    #[test]
    fn test_is_not_found() {
        let missing = StoreError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(missing.is_not_found());

        let denied = StoreError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!denied.is_not_found());
    }

    #[test]
    fn test_source_is_io_error() {
        use std::error::Error;

        let err = StoreError::from(io::Error::other("boom"));
        assert!(err.source().is_some());
    }
}

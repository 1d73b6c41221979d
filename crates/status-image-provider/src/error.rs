//! Error types for the image provider client

use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    Http(Box<reqwest::Error>),
    /// Provider answered with a non-success status code
    Status(u16),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(err) => write!(f, "HTTP error: {}", err),
            ProviderError::Status(code) => write!(f, "Provider returned status {}", code),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ProviderError::Status(404);
        assert_eq!(format!("{}", err), "Provider returned status 404");
    }

    #[test]
    fn test_error_is_debug() {
        let err = ProviderError::Status(503);
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Status"));
    }
}

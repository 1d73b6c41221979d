//! Error types for the status image proxy

use std::fmt;

#[derive(Debug)]
pub enum ProxyError {
    Store(status_image_store::StoreError),
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::Store(err) => write!(f, "Cache error: {}", err),
            ProxyError::Io(err) => write!(f, "IO error: {}", err),
            ProxyError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::Store(err) => Some(err),
            ProxyError::Io(err) => Some(err.as_ref()),
            ProxyError::Config(_) => None,
        }
    }
}

impl From<status_image_store::StoreError> for ProxyError {
    fn from(err: status_image_store::StoreError) -> Self {
        ProxyError::Store(err)
    }
}

impl From<std::io::Error> for ProxyError {
    fn from(err: std::io::Error) -> Self {
        ProxyError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for ProxyError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        ProxyError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = ProxyError::from(status_image_store::StoreError::from(
            std::io::Error::other("read-only file system"),
        ));
        assert_eq!(
            format!("{}", err),
            "Cache error: IO error: read-only file system"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = ProxyError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert_eq!(format!("{}", err), "IO error: address in use");
    }

    #[test]
    fn test_config_error_display() {
        let err = ProxyError::Config("bad log directive".to_string());
        assert_eq!(format!("{}", err), "Configuration error: bad log directive");
    }
}

//! Cache key type

use std::fmt;

/// Extension every cached image is stored under
pub const IMAGE_EXTENSION: &str = "jpg";

/// Opaque identifier for one cached image, taken from the request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    /// Wrap a key string as-is
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive a key from a URI path by dropping the leading slash.
    ///
    /// The rest of the path is kept verbatim, including any further slashes.
    pub fn from_path(path: &str) -> Self {
        Self::new(path.strip_prefix('/').unwrap_or(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the cache entry, `<key>.jpg`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, IMAGE_EXTENSION)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_strips_one_leading_slash() {
        assert_eq!(CacheKey::from_path("/200").as_str(), "200");
        assert_eq!(CacheKey::from_path("//418").as_str(), "/418");
        assert_eq!(CacheKey::from_path("404").as_str(), "404");
    }

    #[test]
    fn test_from_path_keeps_nested_segments() {
        assert_eq!(CacheKey::from_path("/a/b").as_str(), "a/b");
    }

    #[test]
    fn test_root_path_is_empty_key() {
        let key = CacheKey::from_path("/");
        assert_eq!(key.as_str(), "");
        assert_eq!(key.file_name(), ".jpg");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(CacheKey::new("503").file_name(), "503.jpg");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CacheKey::new("201")), "201");
    }
}

//! Flat file store for cached status images
//!
//! Every image lives at `<cache-dir>/<key>.jpg`. There is no metadata and no
//! index: a file existing on disk is the whole definition of a cache entry.

mod error;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use store::ImageStore;
pub use types::CacheKey;

//! Status image provider client
//!
//! Fetches raw image bytes for a status code key from an upstream provider
//! such as <https://http.cat>.

pub mod client;
pub mod error;

pub use client::ImageProvider;
pub use error::{ProviderError, Result};

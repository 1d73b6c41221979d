//! Status image proxy - caching proxy for HTTP status code images
//!
//! Serves `<cache-dir>/<key>.jpg` for `GET /<key>`, filling misses from an
//! upstream provider. `PUT` stores a client image and `DELETE` drops it.

mod config;
mod error;
mod server;

use crate::config::{ProxyArgs, ProxyConfig};
use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use clap::Parser;
use status_image_provider::ImageProvider;
use status_image_store::ImageStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing options exit with a usage error before anything else happens
    let config = ProxyConfig::from(ProxyArgs::parse());

    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("status_image_proxy=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting status image proxy...");
    info!("Address: {}", config.addr());
    info!("Cache dir: {:?}", config.cache_dir);
    info!("Provider: {}", config.provider_url);

    let store = ImageStore::new(&config.cache_dir);
    if let Err(e) = store.init().await {
        error!(cache_dir = ?config.cache_dir, error = %e, "Failed to create cache directory");
        return Err(e.into());
    }

    let provider = ImageProvider::new(config.provider_url.as_str());

    let state: SharedState = Arc::new(ServerState::new(store, provider));

    // Start HTTP server (blocking)
    start_server(state, &config).await?;

    Ok(())
}

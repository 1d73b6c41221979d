//! Command line configuration

use clap::{ArgAction, Parser};
use status_image_provider::ImageProvider;
use std::path::PathBuf;

/// Default cap on PUT body size (50 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Raw command line arguments.
///
/// `-h` is taken by `--host`, so help is only reachable through `--help`.
#[derive(Debug, Parser)]
#[command(
    name = "status-image-proxy",
    version,
    about = "Caching proxy for HTTP status code images",
    disable_help_flag = true
)]
pub struct ProxyArgs {
    /// Address of the server
    #[arg(short = 'h', long)]
    pub host: String,

    /// Port of the server
    #[arg(short = 'p', long)]
    pub port: u16,

    /// Path to the cache directory
    #[arg(short = 'c', long = "cache")]
    pub cache_dir: PathBuf,

    /// Base URL of the upstream image provider
    #[arg(long, default_value = ImageProvider::DEFAULT_BASE_URL)]
    pub provider_url: String,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// Configuration for the proxy, built once at startup
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub cache_dir: PathBuf,
    pub provider_url: String,
    pub max_body_bytes: usize,
}

impl ProxyConfig {
    /// `host:port` for logging, with IPv6 literals bracketed
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl From<ProxyArgs> for ProxyConfig {
    fn from(args: ProxyArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            cache_dir: args.cache_dir,
            provider_url: args.provider_url,
            max_body_bytes: args.max_body_bytes,
        }
    }
}

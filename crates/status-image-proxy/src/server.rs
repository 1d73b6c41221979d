//! HTTP server and request dispatch
//!
//! There is no route table: every path is a cache key and the request method
//! alone decides what happens to it.

use crate::config::ProxyConfig;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderName, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use status_image_provider::{ImageProvider, ProviderError};
use status_image_store::{CacheKey, ImageStore};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

/// Shared state for the HTTP server
pub struct ServerState {
    pub store: ImageStore,
    pub provider: ImageProvider,
}

impl ServerState {
    pub fn new(store: ImageStore, provider: ImageProvider) -> Self {
        Self { store, provider }
    }
}

pub type SharedState = Arc<ServerState>;

/// Where a served image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageSource {
    Cache,
    Provider,
}

impl ImageSource {
    fn cache_header(self) -> &'static str {
        match self {
            ImageSource::Cache => "HIT",
            ImageSource::Provider => "MISS",
        }
    }
}

/// Create the HTTP router
pub fn create_router(state: SharedState, max_body_bytes: usize) -> Router {
    Router::new()
        .fallback(handle_request)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `host:port` and serve until the process exits
pub async fn start_server(state: SharedState, config: &ProxyConfig) -> std::io::Result<()> {
    let router = create_router(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await
}

async fn handle_request(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    info!(method = %method, uri = %uri, "Received request");
    let key = CacheKey::from_path(uri.path());

    match method {
        Method::GET => get_image(&state, &key).await,
        Method::PUT => put_image(&state, &key, &body).await,
        Method::DELETE => delete_image(&state, &key).await,
        _ => text_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
    }
}

async fn get_image(state: &ServerState, key: &CacheKey) -> Response {
    match load_image(state, key).await {
        Ok((data, source)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/jpeg"),
                (HeaderName::from_static("x-cache"), source.cache_header()),
            ],
            data,
        )
            .into_response(),
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to fetch image from provider");
            text_response(StatusCode::NOT_FOUND, "Image not found")
        }
    }
}

/// Serve from disk, falling back to the provider and filling the cache.
///
/// A failed cache write after a successful fetch still returns the image.
async fn load_image(
    state: &ServerState,
    key: &CacheKey,
) -> Result<(Vec<u8>, ImageSource), ProviderError> {
    match state.store.read(key).await {
        Ok(data) => return Ok((data, ImageSource::Cache)),
        Err(e) if e.is_not_found() => {
            debug!(key = %key, "Image not found in cache, fetching from provider");
        }
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to read cached image, fetching from provider");
        }
    }

    let data = state.provider.fetch_image(key.as_str()).await?;

    if let Err(e) = state.store.write(key, &data).await {
        warn!(key = %key, error = %e, "Failed to cache fetched image");
    }

    Ok((data, ImageSource::Provider))
}

async fn put_image(state: &ServerState, key: &CacheKey, body: &[u8]) -> Response {
    if body.is_empty() {
        return text_response(StatusCode::BAD_REQUEST, "No image in request body");
    }

    info!(key = %key, path = ?state.store.path_for(key), size = body.len(), "Saving image");

    match state.store.write(key, body).await {
        Ok(()) => text_response(StatusCode::CREATED, "Image saved"),
        Err(e) => {
            warn!(key = %key, error = %e, "Error saving image");
            text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

async fn delete_image(state: &ServerState, key: &CacheKey) -> Response {
    match state.store.remove(key).await {
        Ok(()) => text_response(StatusCode::OK, "Image deleted"),
        Err(e) => {
            warn!(key = %key, error = %e, "Delete failed");
            text_response(StatusCode::NOT_FOUND, "Image not found")
        }
    }
}

fn text_response(status: StatusCode, message: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], message).into_response()
}

//! Top-level router combining the public site, assets and middleware.
//!
//! # Route Structure
//!
//! - `/`, `/blog/*`, `/events`, `/contact`, `/submit-testimonial` - Public site
//! - `GET /health` - Database health check
//! - `/static/*` - Stylesheets and scripts
//! - `/media/*` - Uploaded post and event images
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::config::Config;
use crate::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// When `config.behind_proxy` is set, rate limiting reads the client IP from
/// `X-Forwarded-For` / `X-Real-IP` instead of the peer socket address. Enable
/// it only behind a trusted reverse proxy.
///
/// The returned service must be served with connect info, as the rate limiter
/// keys on the client address.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let public = web::routes::public_routes();
    let public = if config.behind_proxy {
        public.layer(rate_limit::layer(SmartIpKeyExtractor, config.rate_limit)?)
    } else {
        public.layer(rate_limit::layer(PeerIpKeyExtractor, config.rate_limit)?)
    };

    let router = Router::new()
        .merge(public)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .nest_service("/media", ServeDir::new(&config.media_dir))
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor};

/// Token bucket settings for one limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Seconds needed to replenish one request.
    pub per_second: u64,
    /// Requests a client may send in a burst.
    pub burst_size: u32,
}

impl Default for RateLimit {
    /// 1 request per 2 seconds after a burst of 100.
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 100,
        }
    }
}

/// Creates a rate limiter keyed by `key_extractor`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Use [`PeerIpKeyExtractor`](tower_governor::key_extractor::PeerIpKeyExtractor)
/// to key on the socket peer address, or
/// [`SmartIpKeyExtractor`](tower_governor::key_extractor::SmartIpKeyExtractor)
/// to read `X-Forwarded-For` / `X-Real-IP` behind a trusted reverse proxy.
/// Both need the server to be started with connect info.
///
/// # Errors
///
/// Returns an error if either setting is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = web::routes::public_routes()
///     .layer(rate_limit::layer(PeerIpKeyExtractor, RateLimit::default())?);
/// ```
pub fn layer<K>(
    key_extractor: K,
    limit: RateLimit,
) -> Result<GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
where
    K: KeyExtractor,
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(limit.per_second)
        .burst_size(limit.burst_size)
        .key_extractor(key_extractor)
        .finish()
        .with_context(|| format!("Invalid rate limit settings: {limit:?}"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

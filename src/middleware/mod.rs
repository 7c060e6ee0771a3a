//! HTTP middleware applied by the top-level router.
//!
//! - [`rate_limit`] - Per-client token bucket for the public site
//! - [`tracing`] - Request/response spans

pub mod rate_limit;
pub mod tracing;

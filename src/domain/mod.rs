//! Domain layer containing the site's records and data access contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by
//! [`crate::infrastructure::persistence`], and business rules live in
//! [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Blog posts, events, contact inquiries and testimonials
//! - [`repositories`] - Data access trait definitions and list filters
//! - [`period`] - Date-range presets used by admin listings

pub mod entities;
pub mod period;
pub mod repositories;

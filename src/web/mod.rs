//! Public website layer.
//!
//! Renders server-side HTML pages with Askama templates and accepts the two
//! public form submissions.
//!
//! # Modules
//!
//! - [`flash`] - One-shot notices carried across a redirect
//! - [`forms`] - Contact and testimonial form schemas
//! - [`handlers`] - Page and form handlers
//! - [`layout`] - Data shared by every page template
//! - [`routes`] - Public route table

pub mod flash;
pub mod forms;
pub mod handlers;
pub mod layout;
pub mod routes;

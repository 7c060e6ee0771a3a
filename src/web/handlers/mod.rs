//! Page and form handlers for the public site.
//!
//! Every page handler samples the current time once and passes it down, so
//! upcoming/past decisions within one response agree with each other.

mod blog;
mod contact;
mod events;
mod health;
mod home;
mod testimonial;

pub use blog::{blog_detail_handler, blog_list_handler};
pub use contact::{contact_form_handler, contact_submit_handler};
pub use events::events_handler;
pub use health::{CheckStatus, HealthChecks, HealthResponse, health_handler};
pub use home::home_handler;
pub use testimonial::submit_testimonial_handler;

//! Application layer services implementing the site's rules.
//!
//! Services consume repository traits and provide the API used by the web
//! handlers and the admin tool: ordering, the upcoming/past partition, intake of
//! public submissions and testimonial moderation.
//!
//! # Available Services
//!
//! - [`services::blog_service::BlogService`] - Blog post reading and admin edits
//! - [`services::event_service::EventService`] - Event schedule and admin edits
//! - [`services::inquiry_service::InquiryService`] - Contact inquiry intake and cleanup
//! - [`services::testimonial_service::TestimonialService`] - Testimonial intake and approval

pub mod services;

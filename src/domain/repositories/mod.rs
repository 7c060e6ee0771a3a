//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`BlogPostRepository`] - Blog post storage and admin edits
//! - [`EventRepository`] - Event storage and date lookups
//! - [`ContactInquiryRepository`] - Inquiry intake, listing and cleanup
//! - [`TestimonialRepository`] - Testimonial intake and moderation
//!
//! Each repository has a companion filter type mirroring the search and
//! filter options of the admin listings.
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.
//! See integration tests in `tests/repository_*.rs` for usage against PostgreSQL.

pub mod blog_post_repository;
pub mod contact_inquiry_repository;
pub mod event_repository;
pub mod testimonial_repository;

pub use blog_post_repository::{BlogPostFilter, BlogPostRepository};
pub use contact_inquiry_repository::{ContactInquiryRepository, InquiryFilter};
pub use event_repository::{EventFilter, EventRepository};
pub use testimonial_repository::{TestimonialFilter, TestimonialRepository};

#[cfg(test)]
pub use blog_post_repository::MockBlogPostRepository;
#[cfg(test)]
pub use contact_inquiry_repository::MockContactInquiryRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use testimonial_repository::MockTestimonialRepository;

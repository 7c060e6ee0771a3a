//! Core records of the content backend.
//!
//! Each record type is a standalone aggregate: there are no references between
//! them. Creation inputs use separate structs (`NewBlogPost`, `NewEvent`, ...)
//! because identifiers and timestamps are assigned by the store.
//!
//! # Entity Types
//!
//! - [`BlogPost`] - An article published by staff
//! - [`Event`] - A webinar or meetup with a scheduled date
//! - [`ContactInquiry`] - A message sent through the contact form
//! - [`Testimonial`] - A customer review awaiting or past moderation
//!
//! Closed value types ([`InquiryType`], [`Rating`]) make out-of-range values
//! unrepresentable once input has been parsed.

pub mod blog_post;
pub mod contact_inquiry;
pub mod event;
pub mod testimonial;

pub use blog_post::{BlogPost, BlogPostPatch, NewBlogPost};
pub use contact_inquiry::{ContactInquiry, InquiryType, NewContactInquiry, UnknownInquiryType};
pub use event::{Event, EventPatch, EventSchedule, EventStatus, NewEvent};
pub use testimonial::{InvalidRating, NewTestimonial, Rating, Testimonial};

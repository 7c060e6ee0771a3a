//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Rows are
//! read into private `FromRow` structs and converted into domain entities, so
//! nothing outside this module depends on the table layout.
//!
//! # Repositories
//!
//! - [`PgBlogPostRepository`] - Blog posts
//! - [`PgEventRepository`] - Events
//! - [`PgContactInquiryRepository`] - Contact inquiries
//! - [`PgTestimonialRepository`] - Testimonials

pub mod pg_blog_post_repository;
pub mod pg_contact_inquiry_repository;
pub mod pg_event_repository;
pub mod pg_testimonial_repository;

pub use pg_blog_post_repository::PgBlogPostRepository;
pub use pg_contact_inquiry_repository::PgContactInquiryRepository;
pub use pg_event_repository::PgEventRepository;
pub use pg_testimonial_repository::PgTestimonialRepository;

/// Builds an `ILIKE` pattern matching `term` anywhere in a column.
///
/// `%`, `_` and `\` in the search term are escaped so they match literally.
/// Returns `None` for blank terms, which the queries treat as "no filter".
pub(crate) fn like_pattern(term: Option<&str>) -> Option<String> {
    let term = term.map(str::trim).filter(|t| !t.is_empty())?;

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    Some(pattern)
}

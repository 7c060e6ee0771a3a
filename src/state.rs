//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    BlogService, EventService, InquiryService, TestimonialService,
};
use crate::infrastructure::persistence::{
    PgBlogPostRepository, PgContactInquiryRepository, PgEventRepository, PgTestimonialRepository,
};

/// Services backed by PostgreSQL, cloned cheaply into each request.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService<PgBlogPostRepository>>,
    pub event_service: Arc<EventService<PgEventRepository>>,
    pub inquiry_service: Arc<InquiryService<PgContactInquiryRepository>>,
    pub testimonial_service: Arc<TestimonialService<PgTestimonialRepository>>,
    pub pool: Arc<PgPool>,
}

impl AppState {
    /// Wires every repository and service onto one connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let blog_repo = Arc::new(PgBlogPostRepository::new(pool.clone()));
        let event_repo = Arc::new(PgEventRepository::new(pool.clone()));
        let inquiry_repo = Arc::new(PgContactInquiryRepository::new(pool.clone()));
        let testimonial_repo = Arc::new(PgTestimonialRepository::new(pool.clone()));

        Self {
            blog_service: Arc::new(BlogService::new(blog_repo)),
            event_service: Arc::new(EventService::new(event_repo)),
            inquiry_service: Arc::new(InquiryService::new(inquiry_repo)),
            testimonial_service: Arc::new(TestimonialService::new(testimonial_repo)),
            pool,
        }
    }
}

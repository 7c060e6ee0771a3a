//! Testimonial entity and star rating.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

/// Returned when a value falls outside the 1–5 star range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct InvalidRating(pub i64);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, InvalidRating> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidRating(value))
        }
    }

    /// Every valid rating, highest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Five-glyph star bar, e.g. `★★★★☆` for four stars.
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }

    /// Label used in selectors, e.g. "1 Star" or "4 Stars".
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 Star".to_string()
        } else {
            format!("{} Stars", self.0)
        }
    }
}

impl TryFrom<i16> for Rating {
    type Error = InvalidRating;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Rating::new(i64::from(value))
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        i16::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer review.
///
/// Testimonials start unapproved and only become publicly visible after a
/// staff member approves them.
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub company: Option<String>,
    pub rating: Rating,
    pub comment: String,
    pub is_approved: bool,
    pub submitted_at: DateTime<Utc>,
}

impl Testimonial {
    /// Creates a new Testimonial instance.
    pub fn new(
        id: i64,
        name: String,
        company: Option<String>,
        rating: Rating,
        comment: String,
        is_approved: bool,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            company,
            rating,
            comment,
            is_approved,
            submitted_at,
        }
    }
}

impl fmt::Display for Testimonial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} stars", self.name, self.rating)
    }
}

/// Validated testimonial submission, ready to be stored unapproved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestimonial {
    pub name: String,
    pub company: Option<String>,
    pub rating: Rating,
    pub comment: String,
}

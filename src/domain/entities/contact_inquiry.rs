//! Contact inquiry entity and the closed set of inquiry types.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category selected by the visitor on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryType {
    General,
    Demo,
    Prototyping,
    Consulting,
    Partnership,
    Support,
}

impl InquiryType {
    /// All inquiry types in the order they are offered on the form.
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Demo,
        InquiryType::Prototyping,
        InquiryType::Consulting,
        InquiryType::Partnership,
        InquiryType::Support,
    ];

    /// Stable code used in form submissions and storage.
    pub fn code(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Demo => "demo",
            InquiryType::Prototyping => "prototyping",
            InquiryType::Consulting => "consulting",
            InquiryType::Partnership => "partnership",
            InquiryType::Support => "support",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Question",
            InquiryType::Demo => "Request a Demo",
            InquiryType::Prototyping => "Prototyping Service Inquiry",
            InquiryType::Consulting => "AI Consulting",
            InquiryType::Partnership => "Partnership Opportunity",
            InquiryType::Support => "Technical Support",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the inquiry type codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown inquiry type: {0:?}")]
pub struct UnknownInquiryType(pub String);

impl FromStr for InquiryType {
    type Err = UnknownInquiryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryType::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| UnknownInquiryType(s.to_string()))
    }
}

/// A message submitted through the public contact form.
///
/// Inquiries are immutable once stored. Staff can read and delete them, nothing
/// else.
#[derive(Debug, Clone)]
pub struct ContactInquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub inquiry_type: InquiryType,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactInquiry {
    /// Creates a new ContactInquiry instance.
    pub fn new(
        id: i64,
        name: String,
        email: String,
        company_name: Option<String>,
        inquiry_type: InquiryType,
        message: String,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            company_name,
            inquiry_type,
            message,
            submitted_at,
        }
    }
}

impl fmt::Display for ContactInquiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.inquiry_type.label())
    }
}

/// Validated contact form submission, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactInquiry {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub inquiry_type: InquiryType,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_codes() {
        for kind in InquiryType::ALL {
            assert_eq!(kind.code().parse::<InquiryType>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("sales".parse::<InquiryType>().is_err());
        assert!("".parse::<InquiryType>().is_err());
        // Codes are case-sensitive.
        assert!("Demo".parse::<InquiryType>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(InquiryType::Demo.label(), "Request a Demo");
        assert_eq!(InquiryType::Consulting.to_string(), "AI Consulting");
    }

    #[test]
    fn test_display() {
        let inquiry = ContactInquiry::new(
            1,
            "Jane Doe".to_string(),
            "jane@biz.com".to_string(),
            None,
            InquiryType::Demo,
            "Need a demo".to_string(),
            Utc::now(),
        );
        assert_eq!(inquiry.to_string(), "Jane Doe - Request a Demo");
    }
}

//! Public form schemas.
//!
//! Forms deserialize from `application/x-www-form-urlencoded` bodies with every
//! field defaulting to an empty string, so a missing field surfaces as a
//! "required" field error rather than a rejected request. Values are trimmed on
//! the way in.
//!
//! [`ContactForm::clean`] and [`TestimonialForm::clean`] either return a typed
//! record ready to be stored or a [`FormErrors`] map keyed by field name.

use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::domain::entities::{InquiryType, NewContactInquiry, NewTestimonial, Rating};

const REQUIRED: &str = "required";
const REQUIRED_MESSAGE: &str = "This field is required.";

const NAME_MAX_CHARS: usize = 100;
/// Matches the `contact_inquiries.email` column width.
const EMAIL_MAX_CHARS: usize = 254;

/// Field-level validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    /// Messages for one field; empty if the field is valid.
    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the invalid fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn single(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self(errors)
    }
}

impl From<ValidationErrors> for FormErrors {
    /// Keeps only the "required" message for a blank field, so an empty email
    /// is not also reported as malformed.
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();

        for (field, field_errors) in errors.field_errors() {
            let required = field_errors.iter().any(|e| e.code == REQUIRED);
            let messages: Vec<String> = field_errors
                .iter()
                .filter(|e| !required || e.code == REQUIRED)
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({}).", e.code))
                })
                .collect();
            map.insert(field.to_string(), messages);
        }

        Self(map)
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn invalid_choice(value: &str) -> ValidationError {
    ValidationError::new("invalid_choice").with_message(Cow::Owned(format!(
        "Select a valid choice. {value} is not one of the available choices."
    )))
}

fn required() -> ValidationError {
    ValidationError::new(REQUIRED).with_message(Cow::Borrowed(REQUIRED_MESSAGE))
}

fn too_long(max: usize) -> ValidationError {
    ValidationError::new("max_length").with_message(Cow::Owned(format!(
        "Ensure this value has at most {max} characters."
    )))
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(required());
    }
    if value.chars().count() > NAME_MAX_CHARS {
        return Err(too_long(NAME_MAX_CHARS));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(required());
    }
    if value.chars().count() > EMAIL_MAX_CHARS {
        return Err(too_long(EMAIL_MAX_CHARS));
    }
    if !value.validate_email() {
        return Err(ValidationError::new("email")
            .with_message(Cow::Borrowed("Enter a valid email address.")));
    }
    Ok(())
}

fn validate_inquiry_type(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(required());
    }
    value
        .parse::<InquiryType>()
        .map(|_| ())
        .map_err(|_| invalid_choice(value))
}

fn validate_rating(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(required());
    }
    parse_rating(value).map(|_| ()).ok_or_else(|| invalid_choice(value))
}

fn parse_rating(value: &str) -> Option<Rating> {
    value.parse::<i64>().ok().and_then(|v| Rating::new(v).ok())
}

/// Contact page form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 200, message = "Ensure this value has at most 200 characters."))]
    pub company_name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_inquiry_type"))]
    pub inquiry_type: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "required", message = "This field is required."))]
    pub message: String,
}

impl ContactForm {
    /// Validates the submission and builds the inquiry to store.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its messages. Nothing is returned for
    /// storage unless all fields are valid.
    pub fn clean(&self) -> Result<NewContactInquiry, FormErrors> {
        self.validate()?;

        let inquiry_type = self.inquiry_type.parse::<InquiryType>().map_err(|_| {
            FormErrors::single("inquiry_type", &invalid_choice(&self.inquiry_type).to_string())
        })?;

        Ok(NewContactInquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            company_name: optional(&self.company_name),
            inquiry_type,
            message: self.message.clone(),
        })
    }
}

/// Testimonial submission form on the home page.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TestimonialForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 200, message = "Ensure this value has at most 200 characters."))]
    pub company: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_rating"))]
    pub rating: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "required", message = "This field is required."))]
    pub comment: String,
}

impl TestimonialForm {
    /// Validates the submission and builds the testimonial to store.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its messages.
    pub fn clean(&self) -> Result<NewTestimonial, FormErrors> {
        self.validate()?;

        let rating = parse_rating(&self.rating).ok_or_else(|| {
            FormErrors::single("rating", &invalid_choice(&self.rating).to_string())
        })?;

        Ok(NewTestimonial {
            name: self.name.clone(),
            company: optional(&self.company),
            rating,
            comment: self.comment.clone(),
        })
    }
}

//! One-shot notices shown after a form redirect.
//!
//! A handler that redirects after a submission stores a [`Notice`] code in a
//! short-lived `flash` cookie. The next page rendered reads it through the
//! [`Flash`] extractor, shows the message once and clears the cookie.
//!
//! Only codes of the closed [`Notice`] set are ever written to or accepted from
//! the cookie, so visitor input never travels through it.
//!
//! # Cookie Format
//!
//! ```text
//! Set-Cookie: flash=inquiry_received; Path=/; Max-Age=60; HttpOnly; SameSite=Lax
//! ```

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use std::convert::Infallible;

/// Name of the cookie carrying the pending notice.
pub const FLASH_COOKIE: &str = "flash";

/// Seconds a notice survives if the redirect is never followed.
const FLASH_MAX_AGE: u32 = 60;

/// Severity of a notice, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Every message the site can flash after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InquiryReceived,
    TestimonialReceived,
    TestimonialRejected,
}

impl Notice {
    const ALL: [Notice; 3] = [
        Notice::InquiryReceived,
        Notice::TestimonialReceived,
        Notice::TestimonialRejected,
    ];

    /// Cookie-safe identifier.
    pub fn code(self) -> &'static str {
        match self {
            Notice::InquiryReceived => "inquiry_received",
            Notice::TestimonialReceived => "testimonial_received",
            Notice::TestimonialRejected => "testimonial_rejected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code)
    }

    pub fn level(self) -> NoticeLevel {
        match self {
            Notice::InquiryReceived | Notice::TestimonialReceived => NoticeLevel::Success,
            Notice::TestimonialRejected => NoticeLevel::Error,
        }
    }

    /// CSS modifier for the alert box.
    pub fn css_class(self) -> &'static str {
        match self.level() {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::InquiryReceived => {
                "Thank you for your inquiry! We will get back to you within 24 hours."
            }
            Notice::TestimonialReceived => {
                "Thank you for your testimonial! It will be reviewed and published soon."
            }
            Notice::TestimonialRejected => {
                "There was an error with your testimonial. Please try again."
            }
        }
    }
}

/// Pending notice read from the request cookies.
///
/// # Example
///
/// ```rust,ignore
/// async fn page(flash: Flash) -> Response {
///     let layout = Layout::new(flash.notice());
///     flash.consume(PageTemplate { layout })
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Flash(Option<Notice>);

impl Flash {
    pub fn notice(&self) -> Option<Notice> {
        self.0
    }

    /// Turns `page` into a response, clearing the cookie if a notice was shown.
    pub fn consume(self, page: impl IntoResponse) -> Response {
        if self.0.is_some() {
            let clear = format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax");
            (AppendHeaders([(SET_COOKIE, clear)]), page).into_response()
        } else {
            page.into_response()
        }
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash(read_notice(&parts.headers)))
    }
}

/// Redirects to `to` (303 See Other) with `notice` queued for the next page.
pub fn redirect_with_notice(to: &str, notice: Notice) -> Response {
    let cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; Max-Age={FLASH_MAX_AGE}; HttpOnly; SameSite=Lax",
        notice.code()
    );
    (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(to)).into_response()
}

/// Finds the `flash` cookie among all `Cookie` headers.
///
/// Unknown codes are ignored.
fn read_notice(headers: &HeaderMap) -> Option<Notice> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            if name == FLASH_COOKIE {
                Notice::from_code(value)
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode, header::LOCATION};

    #[test]
    fn test_codes_round_trip() {
        for notice in Notice::ALL {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("<script>"), None);
    }

    #[test]
    fn test_levels() {
        assert_eq!(Notice::InquiryReceived.css_class(), "success");
        assert_eq!(Notice::TestimonialRejected.css_class(), "error");
        assert!(Notice::InquiryReceived.message().contains("24 hours"));
    }

    #[test]
    fn test_read_notice_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; flash=testimonial_received; lang=en"),
        );
        assert_eq!(read_notice(&headers), Some(Notice::TestimonialReceived));
    }

    #[test]
    fn test_read_notice_ignores_unknown_code() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("flash=anything"));
        assert_eq!(read_notice(&headers), None);
        assert_eq!(read_notice(&HeaderMap::new()), None);
    }

    #[test]
    fn test_redirect_sets_cookie() {
        let response = redirect_with_notice("/contact/", Notice::InquiryReceived);

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/contact/");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash=inquiry_received;"));
    }

    #[test]
    fn test_consume_clears_only_when_shown() {
        let shown = Flash(Some(Notice::InquiryReceived)).consume("page");
        assert!(
            shown.headers()[SET_COOKIE]
                .to_str()
                .unwrap()
                .contains("Max-Age=0")
        );

        let nothing = Flash(None).consume("page");
        assert!(nothing.headers().get(SET_COOKIE).is_none());
    }
}

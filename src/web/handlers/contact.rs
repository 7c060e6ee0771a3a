//! Contact page: form display and inquiry intake.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::InquiryType;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{Flash, Notice, redirect_with_notice};
use crate::web::forms::{ContactForm, FormErrors};
use crate::web::layout::Layout;

/// Where a successful submission lands.
const CONTACT_PATH: &str = "/contact/";

/// Template for the contact page.
///
/// On a failed submission the form is rendered again with the submitted values
/// and the messages for each invalid field.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: ContactForm,
    pub errors: FormErrors,
    pub inquiry_types: [InquiryType; 6],
}

impl ContactTemplate {
    fn new(layout: Layout, form: ContactForm, errors: FormErrors) -> Self {
        Self {
            layout,
            form,
            errors,
            inquiry_types: InquiryType::ALL,
        }
    }
}

/// Renders an empty contact form.
///
/// # Endpoint
///
/// `GET /contact`
pub async fn contact_form_handler(flash: Flash) -> Response {
    let page = ContactTemplate::new(
        Layout::new(flash.notice()),
        ContactForm::default(),
        FormErrors::default(),
    );
    flash.consume(page)
}

/// Accepts a contact inquiry.
///
/// # Endpoint
///
/// `POST /contact`
///
/// # Responses
///
/// - **303 See Other** to `/contact/` with a thank-you notice once stored
/// - **400 Bad Request** with the form re-rendered when any field is invalid;
///   nothing is stored
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let new_inquiry = match form.clean() {
        Ok(new_inquiry) => new_inquiry,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Contact form rejected");
            let page = ContactTemplate::new(Layout::default(), form, errors);
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    state.inquiry_service.submit(new_inquiry).await?;

    Ok(redirect_with_notice(CONTACT_PATH, Notice::InquiryReceived))
}

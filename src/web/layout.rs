//! Data shared by every page template.

use chrono::{Datelike, Utc};

use crate::site::SITE_NAME;
use crate::web::flash::Notice;

/// Values read by `templates/base.html`.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub site_name: &'static str,
    pub notice: Option<Notice>,
    pub year: i32,
}

impl Layout {
    pub fn new(notice: Option<Notice>) -> Self {
        Self {
            site_name: SITE_NAME,
            notice,
            year: Utc::now().year(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(None)
    }
}

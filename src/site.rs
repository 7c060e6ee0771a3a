//! Site-wide labels.
//!
//! These never change at runtime, so they live here as constants rather than
//! in [`crate::config::Config`] or the database.

/// Public name shown in page titles and the navigation bar.
pub const SITE_NAME: &str = "Al-Solution";

/// Header printed at the top of every admin command.
pub const ADMIN_SITE_HEADER: &str = "Al-Solution Administration";

/// Short title of the administrative tool.
pub const ADMIN_SITE_TITLE: &str = "Al-Solution Admin";

/// Greeting shown by the admin tool when invoked without a command.
pub const ADMIN_INDEX_TITLE: &str = "Welcome to Al-Solution Administration";

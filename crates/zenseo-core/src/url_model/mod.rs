//! Site-relative path helpers.
//!
//! Everything here is total: malformed input is normalized, never rejected.

mod path;
mod prefix;
mod slash;

pub use path::normalize_path;
pub use prefix::{has_locale_prefix, strip_legacy_locale_prefix, strip_locale_prefix, LOCALE_PREFIX};
pub use slash::ensure_trailing_slash;

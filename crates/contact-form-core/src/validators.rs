//! Field predicates for the contact form
//!
//! Each predicate answers a single question about one raw field value. None of
//! them touch the host; [`crate::FormValidator`] decides which ones run and
//! what to show when they fail.

use regex::Regex;
use std::sync::LazyLock;

// RFC-lite email pattern.
//
// One or more characters that are neither whitespace nor `@`, an `@`, the same
// again, a dot, and the same again. Anchored on both ends.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Exactly ten ASCII digits, no delimiters.
static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("PHONE_REGEX: invalid regex pattern"));

/// Returns `true` when the field has a value with at least one
/// non-whitespace character.
///
/// # Examples
///
/// ```
/// use contact_form_core::check_required;
///
/// assert!(check_required(Some("Ada")));
/// assert!(!check_required(Some("   \t")));
/// assert!(!check_required(None));
/// ```
pub fn check_required(value: Option<&str>) -> bool {
	value.is_some_and(|v| !v.trim().is_empty())
}

/// Returns `true` when the whole value looks like an email address.
///
/// The value is matched as-is, so surrounding whitespace is a format error.
/// Callers only apply this to fields that already passed [`check_required`].
///
/// # Examples
///
/// ```
/// use contact_form_core::validate_email;
///
/// assert!(validate_email("foo@bar.com"));
/// assert!(!validate_email("foo@bar"));
/// assert!(!validate_email("foo bar@baz.com"));
/// ```
pub fn validate_email(value: &str) -> bool {
	EMAIL_REGEX.is_match(value)
}

/// Returns `true` when the value is exactly ten ASCII digits.
///
/// # Examples
///
/// ```
/// use contact_form_core::validate_phone;
///
/// assert!(validate_phone("1234567890"));
/// assert!(!validate_phone("12345"));
/// assert!(!validate_phone("123-456-7890"));
/// ```
pub fn validate_phone(value: &str) -> bool {
	PHONE_REGEX.is_match(value)
}

/// Returns `true` when an option past the placeholder (index 0) is selected.
///
/// A select with nothing selected reports `-1`, which is also rejected.
pub fn validate_subject_selected(selected_index: i32) -> bool {
	selected_index > 0
}

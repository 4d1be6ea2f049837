//! # Contact Form
//!
//! Client-side validation for the site's contact form.
//!
//! On submit the form is checked for:
//! - Required `name`, `email`, `phone` and `message` (non-whitespace text)
//! - An email address of the form `local@domain.tld`
//! - A phone number of exactly 10 digits
//! - A subject other than the placeholder option
//!
//! Failures show inline error indicators and move focus to the first invalid
//! field. Reset asks for confirmation before clearing the form.
//!
//! ## Feature Flags
//!
//! - `core` (default) - Validation core, usable on any target
//! - `pages` - WASM browser bindings (`web-sys`)
//! - `full` - All of the above plus the console panic hook
//!
//! ## Example
//!
//! ```
//! use contact_form::{FormValidator, MemoryForm};
//!
//! let mut validator = FormValidator::new(MemoryForm::filled());
//! assert!(validator.on_submit().proceed);
//! ```

pub use contact_form_core::{
	CONTACT_FORM_FIELDS, FieldAccessor, FieldKind, FieldSpec, Format, FormSettings, FormValidator,
	MemoryForm, Outcome, SettingsError, ValidationError, ValidationResult, check_required,
	validate_email, validate_phone, validate_subject_selected,
};

/// Field schema constants and lookups.
pub mod schema {
	pub use contact_form_core::schema::*;
}

#[cfg(feature = "pages")]
pub mod pages;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_facade_reexports_validator() {
		let mut validator = FormValidator::new(MemoryForm::new());
		let result = validator.run_validation();
		assert_eq!(result.first_invalid_field_id, Some(schema::NAME));
	}
}

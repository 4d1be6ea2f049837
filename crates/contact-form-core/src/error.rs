//! Error types
//!
//! [`ValidationError`] describes bad user input. It is returned as data inside
//! [`crate::ValidationResult`] and shown to the user through an indicator,
//! never raised as a fault. [`SettingsError`] is the only failure the core can
//! actually return.

use crate::schema::{self, ERROR_SUFFIX, Format};
use thiserror::Error;

/// A single validation failure found during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Field '{field}' is required")]
	MissingRequiredField { field: &'static str },
	#[error("Enter a valid email address")]
	InvalidEmailFormat,
	#[error("Enter a phone number of exactly 10 digits")]
	InvalidPhoneFormat,
	#[error("Select a subject")]
	NoSubjectSelected,
}

impl ValidationError {
	/// The field this error belongs to.
	pub fn field_id(&self) -> &'static str {
		match self {
			ValidationError::MissingRequiredField { field } => *field,
			ValidationError::InvalidEmailFormat => schema::EMAIL,
			ValidationError::InvalidPhoneFormat => schema::PHONE,
			ValidationError::NoSubjectSelected => schema::SUBJECT,
		}
	}

	/// The indicator element that flags this error.
	pub fn indicator_id(&self) -> String {
		match self {
			ValidationError::MissingRequiredField { field } => format!("{field}{ERROR_SUFFIX}"),
			ValidationError::InvalidEmailFormat => Format::Email.indicator_id().to_string(),
			ValidationError::InvalidPhoneFormat => Format::Phone.indicator_id().to_string(),
			ValidationError::NoSubjectSelected => format!("{}{ERROR_SUFFIX}", schema::SUBJECT),
		}
	}

	pub(crate) fn for_format(format: Format) -> Self {
		match format {
			Format::Email => ValidationError::InvalidEmailFormat,
			Format::Phone => ValidationError::InvalidPhoneFormat,
		}
	}
}

/// Errors raised while loading [`crate::FormSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("Invalid settings JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Setting '{0}' must not be empty")]
	Empty(&'static str),
	#[error("Unknown field '{0}' for reset focus")]
	UnknownField(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ValidationError::MissingRequiredField { field: "phone" }, "phone", "phone_error")]
	#[case(ValidationError::InvalidEmailFormat, "email", "emailFormat_error")]
	#[case(ValidationError::InvalidPhoneFormat, "phone", "phoneFormat_error")]
	#[case(ValidationError::NoSubjectSelected, "subject", "subject_error")]
	fn test_error_targets(
		#[case] error: ValidationError,
		#[case] field: &str,
		#[case] indicator: &str,
	) {
		assert_eq!(error.field_id(), field);
		assert_eq!(error.indicator_id(), indicator);
	}

	#[rstest]
	fn test_error_display() {
		let error = ValidationError::MissingRequiredField { field: "name" };
		assert_eq!(error.to_string(), "Field 'name' is required");
		assert_eq!(
			SettingsError::Empty("form_id").to_string(),
			"Setting 'form_id' must not be empty"
		);
	}
}

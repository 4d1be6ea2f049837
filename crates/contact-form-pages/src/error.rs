//! Errors raised while attaching the validator to a page

use contact_form_core::SettingsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
	#[error("No global window available")]
	NoWindow,
	#[error("Window has no document")]
	NoDocument,
	#[error("Form '{0}' not found")]
	FormNotFound(String),
	#[error("Element '{id}' is not a {expected}")]
	WrongElementType { id: String, expected: &'static str },
	#[error("Failed to attach '{event}' listener: {reason}")]
	Listener { event: &'static str, reason: String },
	#[error(transparent)]
	Settings(#[from] SettingsError),
	#[error("DOM access is only available on wasm32 targets")]
	Unsupported,
}

impl From<DomError> for wasm_bindgen::JsValue {
	fn from(error: DomError) -> Self {
		wasm_bindgen::JsValue::from_str(&error.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_display() {
		assert_eq!(
			DomError::FormNotFound("contactForm".to_string()).to_string(),
			"Form 'contactForm' not found"
		);
		assert_eq!(
			DomError::WrongElementType {
				id: "contactForm".to_string(),
				expected: "form",
			}
			.to_string(),
			"Element 'contactForm' is not a form"
		);
	}

	#[rstest]
	fn test_settings_error_converts() {
		let error: DomError = SettingsError::Empty("form_id").into();
		assert!(matches!(error, DomError::Settings(_)));
		assert_eq!(error.to_string(), "Setting 'form_id' must not be empty");
	}
}

//! Settings for the contact form handlers
//!
//! The defaults match the markup the form ships with, so most hosts never
//! construct settings by hand. A page that renames the form or the indicator
//! class can pass a JSON object instead; missing keys keep their defaults.

use crate::error::SettingsError;
use crate::schema;
use serde::{Deserialize, Serialize};

/// Form id the handlers are attached to.
pub const DEFAULT_FORM_ID: &str = "contactForm";

/// Class shared by every error indicator element.
pub const DEFAULT_ERROR_CLASS: &str = "messageError";

/// Prompt shown before the form is cleared.
pub const DEFAULT_RESET_PROMPT: &str = "Clear message?";

/// Runtime settings for [`crate::FormValidator`].
///
/// # Examples
///
/// ```
/// use contact_form_core::FormSettings;
///
/// let settings = FormSettings::from_json(r#"{"form_id": "surveyForm"}"#).unwrap();
/// assert_eq!(settings.form_id, "surveyForm");
/// assert_eq!(settings.error_class, "messageError");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Id of the `<form>` element.
	pub form_id: String,
	/// Class that tags error indicators for bulk hiding.
	pub error_class: String,
	/// Text of the reset confirmation prompt.
	pub reset_prompt: String,
	/// Field focused after a confirmed reset.
	pub reset_focus_field: String,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			form_id: DEFAULT_FORM_ID.to_string(),
			error_class: DEFAULT_ERROR_CLASS.to_string(),
			reset_prompt: DEFAULT_RESET_PROMPT.to_string(),
			reset_focus_field: schema::NAME.to_string(),
		}
	}
}

impl FormSettings {
	/// Parses settings from a JSON object and validates them.
	pub fn from_json(json: &str) -> Result<Self, SettingsError> {
		let settings: FormSettings = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Rejects empty ids and a reset focus target outside the schema.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.form_id.trim().is_empty() {
			return Err(SettingsError::Empty("form_id"));
		}
		if self.error_class.trim().is_empty() {
			return Err(SettingsError::Empty("error_class"));
		}
		if schema::field(&self.reset_focus_field).is_none() {
			return Err(SettingsError::UnknownField(self.reset_focus_field.clone()));
		}
		Ok(())
	}

	pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
		self.form_id = form_id.into();
		self
	}

	pub fn with_error_class(mut self, error_class: impl Into<String>) -> Self {
		self.error_class = error_class.into();
		self
	}

	pub fn with_reset_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.reset_prompt = prompt.into();
		self
	}
}

//! The fixed field schema of the contact form
//!
//! The order of [`CONTACT_FORM_FIELDS`] is the order in which fields are
//! checked, and therefore decides which field receives focus when several
//! are invalid.

use crate::validators::{validate_email, validate_phone};
use serde::{Deserialize, Serialize};

/// Id of the name text field.
pub const NAME: &str = "name";
/// Id of the email text field.
pub const EMAIL: &str = "email";
/// Id of the phone text field.
pub const PHONE: &str = "phone";
/// Id of the message textarea.
pub const MESSAGE: &str = "message";
/// Id of the subject select.
pub const SUBJECT: &str = "subject";

/// Suffix appended to a field id to get its required-field indicator id.
pub const ERROR_SUFFIX: &str = "_error";

/// How the host exposes a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	/// Free text (`<input>` or `<textarea>`), checked by its trimmed value.
	Text,
	/// A `<select>` whose first option is a placeholder.
	Select,
}

/// A format constraint applied to a text field that has input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
	Email,
	Phone,
}

impl Format {
	/// Whether `value` satisfies this format.
	pub fn is_match(self, value: &str) -> bool {
		match self {
			Format::Email => validate_email(value),
			Format::Phone => validate_phone(value),
		}
	}

	/// Id of the indicator shown when this format check fails.
	pub fn indicator_id(self) -> &'static str {
		match self {
			Format::Email => "emailFormat_error",
			Format::Phone => "phoneFormat_error",
		}
	}
}

/// One entry of the form schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
	pub id: &'static str,
	pub kind: FieldKind,
	pub required: bool,
	pub format: Option<Format>,
}

impl FieldSpec {
	/// Id of the indicator shown when this field is missing.
	pub fn required_indicator_id(&self) -> String {
		format!("{}{}", self.id, ERROR_SUFFIX)
	}
}

/// The contact form, in check order.
pub const CONTACT_FORM_FIELDS: [FieldSpec; 5] = [
	FieldSpec {
		id: NAME,
		kind: FieldKind::Text,
		required: true,
		format: None,
	},
	FieldSpec {
		id: EMAIL,
		kind: FieldKind::Text,
		required: true,
		format: Some(Format::Email),
	},
	FieldSpec {
		id: PHONE,
		kind: FieldKind::Text,
		required: true,
		format: Some(Format::Phone),
	},
	FieldSpec {
		id: MESSAGE,
		kind: FieldKind::Text,
		required: true,
		format: None,
	},
	FieldSpec {
		id: SUBJECT,
		kind: FieldKind::Select,
		required: true,
		format: None,
	},
];

/// Looks up a field of the contact form by id.
pub fn field(id: &str) -> Option<&'static FieldSpec> {
	CONTACT_FORM_FIELDS.iter().find(|spec| spec.id == id)
}

/// Every error indicator id the contact form can show, in schema order.
pub fn indicator_ids() -> Vec<String> {
	let mut ids: Vec<String> = CONTACT_FORM_FIELDS
		.iter()
		.filter(|spec| spec.required)
		.map(FieldSpec::required_indicator_id)
		.collect();
	ids.extend(
		CONTACT_FORM_FIELDS
			.iter()
			.filter_map(|spec| spec.format)
			.map(|format| format.indicator_id().to_string()),
	);
	ids
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_schema_order() {
		let ids: Vec<&str> = CONTACT_FORM_FIELDS.iter().map(|spec| spec.id).collect();
		assert_eq!(ids, vec!["name", "email", "phone", "message", "subject"]);
	}

	#[rstest]
	fn test_only_subject_is_a_select() {
		let selects: Vec<&str> = CONTACT_FORM_FIELDS
			.iter()
			.filter(|spec| spec.kind == FieldKind::Select)
			.map(|spec| spec.id)
			.collect();
		assert_eq!(selects, vec!["subject"]);
	}

	#[rstest]
	#[case("name", "name_error")]
	#[case("subject", "subject_error")]
	fn test_required_indicator_id(#[case] id: &str, #[case] expected: &str) {
		let spec = field(id).expect("field should exist");
		assert_eq!(spec.required_indicator_id(), expected);
	}

	#[rstest]
	fn test_indicator_ids() {
		assert_eq!(
			indicator_ids(),
			vec![
				"name_error",
				"email_error",
				"phone_error",
				"message_error",
				"subject_error",
				"emailFormat_error",
				"phoneFormat_error",
			]
		);
	}

	#[rstest]
	fn test_unknown_field() {
		assert!(field("fax").is_none());
	}
}

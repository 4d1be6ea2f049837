//! Validation pass and event handlers
//!
//! ## Check order
//!
//! ```text
//! name ─► email ─► phone ─► message      required (trimmed, non-empty)
//!            │        │
//!            ▼        ▼
//!      email format  phone format         only when the field has input
//!                         │
//!                         ▼
//!                  subject selected       index > 0
//! ```
//!
//! Every failure shows its own indicator. Only the first failure in this
//! order receives focus, so a missing name always wins over a malformed
//! email, and format or subject errors only take focus when every required
//! text field has input.

use crate::accessor::FieldAccessor;
use crate::error::ValidationError;
use crate::schema::{CONTACT_FORM_FIELDS, FieldKind, FieldSpec};
use crate::settings::FormSettings;
use crate::validators::{check_required, validate_subject_selected};

/// Result of one validation pass. Never stored between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
	pub has_errors: bool,
	/// Field that received focus, if any check failed.
	pub first_invalid_field_id: Option<&'static str>,
	/// Every failure, in check order.
	pub errors: Vec<ValidationError>,
}

impl ValidationResult {
	fn record(&mut self, error: ValidationError) {
		if self.first_invalid_field_id.is_none() {
			self.first_invalid_field_id = Some(error.field_id());
		}
		self.has_errors = true;
		self.errors.push(error);
	}

	pub fn is_valid(&self) -> bool {
		!self.has_errors
	}

	pub fn contains(&self, error: &ValidationError) -> bool {
		self.errors.contains(error)
	}
}

/// Whether the host should go on with the default action of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
	pub proceed: bool,
}

impl Outcome {
	pub fn proceed() -> Self {
		Self { proceed: true }
	}

	pub fn cancel() -> Self {
		Self { proceed: false }
	}

	pub fn is_cancelled(&self) -> bool {
		!self.proceed
	}
}

/// Validates the contact form and handles its submit, reset and load events.
///
/// The validator keeps no state across events; everything it touches lives
/// behind the [`FieldAccessor`].
#[derive(Debug, Clone)]
pub struct FormValidator<A> {
	accessor: A,
	settings: FormSettings,
}

impl<A: FieldAccessor> FormValidator<A> {
	/// Creates a validator with the default settings.
	pub fn new(accessor: A) -> Self {
		Self::with_settings(accessor, FormSettings::default())
	}

	pub fn with_settings(accessor: A, settings: FormSettings) -> Self {
		Self { accessor, settings }
	}

	pub fn accessor(&self) -> &A {
		&self.accessor
	}

	pub fn accessor_mut(&mut self) -> &mut A {
		&mut self.accessor
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn into_accessor(self) -> A {
		self.accessor
	}

	/// Hides every error indicator of the form.
	pub fn hide_all_errors(&mut self) {
		self.accessor.hide_errors(&self.settings.error_class);
	}

	/// Runs every check, shows the failing indicators and focuses the first
	/// invalid field.
	///
	/// Indicators are only ever shown here; call [`Self::hide_all_errors`]
	/// first to clear the previous pass.
	pub fn run_validation(&mut self) -> ValidationResult {
		let mut result = ValidationResult::default();
		let mut has_input = Vec::with_capacity(CONTACT_FORM_FIELDS.len());

		for spec in text_fields() {
			let value = self.accessor.value(spec.id);
			let present = check_required(value.as_deref());
			if !present {
				self.accessor.show_error(&spec.required_indicator_id());
				result.record(ValidationError::MissingRequiredField { field: spec.id });
			}
			has_input.push((spec, value.filter(|_| present)));
		}

		for (spec, value) in &has_input {
			let (Some(format), Some(value)) = (spec.format, value) else {
				continue;
			};
			if !format.is_match(value) {
				self.accessor.show_error(format.indicator_id());
				result.record(ValidationError::for_format(format));
			}
		}

		for spec in select_fields() {
			let index = self.accessor.selected_index(spec.id).unwrap_or(-1);
			if !validate_subject_selected(index) {
				self.accessor.show_error(&spec.required_indicator_id());
				result.record(ValidationError::NoSubjectSelected);
			}
		}

		if let Some(field_id) = result.first_invalid_field_id {
			self.move_focus(field_id);
		}

		result
	}

	/// Handles a submit event. Cancels the submission when any check fails.
	pub fn on_submit(&mut self) -> Outcome {
		self.hide_all_errors();
		let result = self.run_validation();
		tracing::debug!(
			form_id = %self.settings.form_id,
			proceed = result.is_valid(),
			"contact form submit handled"
		);
		if result.has_errors {
			Outcome::cancel()
		} else {
			Outcome::proceed()
		}
	}

	/// Handles a reset event. Asks the user first; declining leaves the form
	/// untouched.
	pub fn on_reset(&mut self) -> Outcome {
		if !self.accessor.confirm(&self.settings.reset_prompt) {
			tracing::debug!(form_id = %self.settings.form_id, "contact form reset declined");
			return Outcome::cancel();
		}

		self.hide_all_errors();
		self.accessor.focus(&self.settings.reset_focus_field);
		tracing::debug!(form_id = %self.settings.form_id, "contact form reset confirmed");
		Outcome::proceed()
	}

	/// Brings the form to its initial state: no indicators, default values.
	///
	/// The reset performed here does not go through [`Self::on_reset`], so
	/// hosts must attach their reset handler after calling this.
	pub fn on_load(&mut self) {
		self.hide_all_errors();
		self.accessor.reset_form(&self.settings.form_id);
		tracing::debug!(form_id = %self.settings.form_id, "contact form loaded");
	}

	fn move_focus(&mut self, field_id: &str) {
		self.accessor.focus(field_id);
		if crate::schema::field(field_id).is_some_and(|spec| spec.kind == FieldKind::Text) {
			self.accessor.select(field_id);
		}
	}
}

fn text_fields() -> impl Iterator<Item = &'static FieldSpec> {
	CONTACT_FORM_FIELDS
		.iter()
		.filter(|spec| spec.required && spec.kind == FieldKind::Text)
}

fn select_fields() -> impl Iterator<Item = &'static FieldSpec> {
	CONTACT_FORM_FIELDS
		.iter()
		.filter(|spec| spec.required && spec.kind == FieldKind::Select)
}

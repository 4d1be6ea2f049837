//! In-memory host for the contact form
//!
//! [`MemoryForm`] behaves like the rendered form closely enough to exercise
//! every handler without a browser: it keeps field values, indicator
//! visibility, focus and text selection, answers confirmation prompts from a
//! script, and records what it was asked to do.

use crate::accessor::FieldAccessor;
use crate::schema::{self, CONTACT_FORM_FIELDS, FieldKind};
use std::collections::{BTreeMap, HashMap};

/// Visibility of every error indicator, keyed by indicator id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDisplayState {
	indicators: BTreeMap<String, bool>,
}

impl ErrorDisplayState {
	/// State with every indicator of the contact form registered and hidden.
	pub fn for_contact_form() -> Self {
		Self {
			indicators: schema::indicator_ids()
				.into_iter()
				.map(|id| (id, false))
				.collect(),
		}
	}

	pub fn show(&mut self, indicator_id: &str) {
		self.indicators.insert(indicator_id.to_string(), true);
	}

	pub fn hide_all(&mut self) {
		for visible in self.indicators.values_mut() {
			*visible = false;
		}
	}

	pub fn is_visible(&self, indicator_id: &str) -> bool {
		self.indicators.get(indicator_id).copied().unwrap_or(false)
	}

	pub fn visible_count(&self) -> usize {
		self.indicators.values().filter(|visible| **visible).count()
	}

	/// Ids of the visible indicators, sorted.
	pub fn visible(&self) -> Vec<&str> {
		self.indicators
			.iter()
			.filter(|(_, visible)| **visible)
			.map(|(id, _)| id.as_str())
			.collect()
	}
}

/// A contact form held entirely in memory.
///
/// # Examples
///
/// ```
/// use contact_form_core::{FieldAccessor, MemoryForm};
///
/// let mut form = MemoryForm::new().with_value("name", "Ada");
/// assert_eq!(form.value("name").as_deref(), Some("Ada"));
///
/// form.reset_form("contactForm");
/// assert_eq!(form.value("name").as_deref(), Some(""));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryForm {
	values: HashMap<String, String>,
	subject_index: i32,
	errors: ErrorDisplayState,
	focused: Option<String>,
	selected: Option<String>,
	focus_calls: usize,
	confirm_answer: bool,
	prompts: Vec<String>,
	resets: usize,
}

impl Default for MemoryForm {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryForm {
	/// An empty contact form with the placeholder subject selected.
	pub fn new() -> Self {
		let values = CONTACT_FORM_FIELDS
			.iter()
			.filter(|spec| spec.kind == FieldKind::Text)
			.map(|spec| (spec.id.to_string(), String::new()))
			.collect();

		Self {
			values,
			subject_index: 0,
			errors: ErrorDisplayState::for_contact_form(),
			focused: None,
			selected: None,
			focus_calls: 0,
			confirm_answer: true,
			prompts: Vec::new(),
			resets: 0,
		}
	}

	/// A form that passes every check.
	pub fn filled() -> Self {
		Self::new()
			.with_value(schema::NAME, "Ada Lovelace")
			.with_value(schema::EMAIL, "a@b.co")
			.with_value(schema::PHONE, "1234567890")
			.with_value(schema::MESSAGE, "Hello there")
			.with_subject(1)
	}

	pub fn with_value(mut self, field_id: &str, value: impl Into<String>) -> Self {
		self.set_value(field_id, value);
		self
	}

	pub fn with_subject(mut self, index: i32) -> Self {
		self.subject_index = index;
		self
	}

	/// Removes a field, as if it were missing from the markup.
	pub fn without_field(mut self, field_id: &str) -> Self {
		self.values.remove(field_id);
		self
	}

	/// Answer given to the next confirmation prompts.
	pub fn answering(mut self, confirm: bool) -> Self {
		self.confirm_answer = confirm;
		self
	}

	pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) {
		self.values.insert(field_id.to_string(), value.into());
	}

	pub fn set_subject(&mut self, index: i32) {
		self.subject_index = index;
	}

	pub fn subject_index(&self) -> i32 {
		self.subject_index
	}

	pub fn errors(&self) -> &ErrorDisplayState {
		&self.errors
	}

	pub fn is_error_visible(&self, indicator_id: &str) -> bool {
		self.errors.is_visible(indicator_id)
	}

	/// Field currently holding focus.
	pub fn focused(&self) -> Option<&str> {
		self.focused.as_deref()
	}

	/// Field whose text is currently selected.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Number of times focus was moved since the form was created.
	pub fn focus_calls(&self) -> usize {
		self.focus_calls
	}

	/// Every confirmation prompt shown, in order.
	pub fn prompts(&self) -> &[String] {
		&self.prompts
	}

	/// Number of form resets performed.
	pub fn resets(&self) -> usize {
		self.resets
	}
}

impl FieldAccessor for MemoryForm {
	fn value(&mut self, field_id: &str) -> Option<String> {
		self.values.get(field_id).cloned()
	}

	fn selected_index(&mut self, field_id: &str) -> Option<i32> {
		(field_id == schema::SUBJECT).then_some(self.subject_index)
	}

	fn show_error(&mut self, indicator_id: &str) {
		self.errors.show(indicator_id);
	}

	fn hide_errors(&mut self, _indicator_class: &str) {
		self.errors.hide_all();
	}

	fn focus(&mut self, field_id: &str) {
		self.focus_calls += 1;
		if self.selected.as_deref() != Some(field_id) {
			self.selected = None;
		}
		self.focused = Some(field_id.to_string());
	}

	fn select(&mut self, field_id: &str) {
		self.selected = Some(field_id.to_string());
	}

	fn confirm(&mut self, prompt: &str) -> bool {
		self.prompts.push(prompt.to_string());
		self.confirm_answer
	}

	fn reset_form(&mut self, _form_id: &str) {
		for value in self.values.values_mut() {
			value.clear();
		}
		self.subject_index = 0;
		self.selected = None;
		self.resets += 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_display_state_starts_hidden() {
		let state = ErrorDisplayState::for_contact_form();
		assert_eq!(state.visible_count(), 0);
		assert!(!state.is_visible("name_error"));
	}

	#[rstest]
	fn test_display_state_show_and_hide() {
		let mut state = ErrorDisplayState::for_contact_form();
		state.show("phone_error");
		state.show("emailFormat_error");
		assert_eq!(state.visible(), vec!["emailFormat_error", "phone_error"]);

		state.hide_all();
		assert_eq!(state.visible_count(), 0);
	}

	#[rstest]
	fn test_new_form_is_empty() {
		let mut form = MemoryForm::new();
		for id in ["name", "email", "phone", "message"] {
			assert_eq!(form.value(id).as_deref(), Some(""));
		}
		assert_eq!(form.selected_index("subject"), Some(0));
		assert_eq!(form.selected_index("name"), None);
	}

	#[rstest]
	fn test_missing_field() {
		let mut form = MemoryForm::new().without_field("phone");
		assert_eq!(form.value("phone"), None);
	}

	#[rstest]
	fn test_reset_clears_values_and_subject() {
		let mut form = MemoryForm::filled();
		form.reset_form("contactForm");
		assert_eq!(form.value("email").as_deref(), Some(""));
		assert_eq!(form.subject_index(), 0);
		assert_eq!(form.resets(), 1);
	}

	#[rstest]
	fn test_confirm_records_prompt() {
		let mut form = MemoryForm::new().answering(false);
		assert!(!form.confirm("Sure?"));
		assert_eq!(form.prompts(), ["Sure?".to_string()]);
	}

	#[rstest]
	fn test_focus_moves_selection_away() {
		let mut form = MemoryForm::new();
		form.focus("email");
		form.select("email");
		form.focus("name");
		assert_eq!(form.focused(), Some("name"));
		assert_eq!(form.selected(), None);
		assert_eq!(form.focus_calls(), 2);
	}
}

//! Host capability consumed by [`crate::FormValidator`]

/// Access to the form as rendered by the host.
///
/// Implementations own the real state: field values, indicator visibility and
/// focus. The validator only reads values and asks for side effects through
/// this trait, so it can run against a browser document or an in-memory fake.
///
/// Methods take `&mut self` so recording hosts such as
/// [`crate::MemoryForm`] need no interior mutability.
pub trait FieldAccessor {
	/// Current text of a field, or `None` if the host has no such field.
	fn value(&mut self, field_id: &str) -> Option<String>;

	/// Selected option index of a select, or `None` if the host has no such
	/// select. `-1` means nothing is selected.
	fn selected_index(&mut self, field_id: &str) -> Option<i32>;

	/// Makes an error indicator visible.
	fn show_error(&mut self, indicator_id: &str);

	/// Hides every element tagged with `indicator_class`.
	fn hide_errors(&mut self, indicator_class: &str);

	/// Moves input focus to a field.
	fn focus(&mut self, field_id: &str);

	/// Selects the text of a text field.
	fn select(&mut self, field_id: &str);

	/// Shows a modal confirmation and returns the user's answer.
	fn confirm(&mut self, prompt: &str) -> bool;

	/// Restores every field of the form to its default value.
	fn reset_form(&mut self, form_id: &str);
}

impl<A: FieldAccessor + ?Sized> FieldAccessor for &mut A {
	fn value(&mut self, field_id: &str) -> Option<String> {
		(**self).value(field_id)
	}

	fn selected_index(&mut self, field_id: &str) -> Option<i32> {
		(**self).selected_index(field_id)
	}

	fn show_error(&mut self, indicator_id: &str) {
		(**self).show_error(indicator_id)
	}

	fn hide_errors(&mut self, indicator_class: &str) {
		(**self).hide_errors(indicator_class)
	}

	fn focus(&mut self, field_id: &str) {
		(**self).focus(field_id)
	}

	fn select(&mut self, field_id: &str) {
		(**self).select(field_id)
	}

	fn confirm(&mut self, prompt: &str) -> bool {
		(**self).confirm(prompt)
	}

	fn reset_form(&mut self, form_id: &str) {
		(**self).reset_form(form_id)
	}
}

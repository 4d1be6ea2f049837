//! `FieldAccessor` over the browser DOM
//!
//! Fields and indicators are looked up by id on every call, so the accessor
//! always sees the live document. Missing elements are logged and treated as
//! absent; the validator then reports the field as missing.

use crate::error::DomError;
use crate::warn_log;
use contact_form_core::FieldAccessor;
use wasm_bindgen::JsCast;
use web_sys::{
	Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
	HtmlTextAreaElement, Window,
};

/// Display value used for a shown indicator.
const SHOWN: &str = "block";
/// Display value used for a hidden indicator.
const HIDDEN: &str = "none";

/// Handle to the page's window and document. Clones share the same page.
#[derive(Debug, Clone)]
pub struct DomFieldAccessor {
	window: Window,
	document: Document,
}

impl DomFieldAccessor {
	/// Accessor for the global window's document.
	pub fn from_window() -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let document = window.document().ok_or(DomError::NoDocument)?;
		Ok(Self { window, document })
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	/// The `<form>` element with the given id.
	pub fn form(&self, form_id: &str) -> Result<HtmlFormElement, DomError> {
		let element = self
			.document
			.get_element_by_id(form_id)
			.ok_or_else(|| DomError::FormNotFound(form_id.to_string()))?;
		element
			.dyn_into::<HtmlFormElement>()
			.map_err(|_| DomError::WrongElementType {
				id: form_id.to_string(),
				expected: "form",
			})
	}

	fn element(&self, id: &str) -> Option<Element> {
		let element = self.document.get_element_by_id(id);
		if element.is_none() {
			warn_log!("Contact form element '{}' not found", id);
		}
		element
	}

	fn html_element(&self, id: &str) -> Option<HtmlElement> {
		self.element(id)?.dyn_into::<HtmlElement>().ok()
	}

	fn set_display(element: &HtmlElement, display: &str) {
		if let Err(err) = element.style().set_property("display", display) {
			warn_log!("Failed to set display on '{}': {:?}", element.id(), err);
		}
	}
}

impl FieldAccessor for DomFieldAccessor {
	fn value(&mut self, field_id: &str) -> Option<String> {
		let element = self.element(field_id)?;
		if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
			return Some(input.value());
		}
		if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
			return Some(textarea.value());
		}
		if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
			return Some(select.value());
		}
		warn_log!("Contact form element '{}' has no value", field_id);
		None
	}

	fn selected_index(&mut self, field_id: &str) -> Option<i32> {
		let select = self.element(field_id)?.dyn_into::<HtmlSelectElement>().ok()?;
		Some(select.selected_index())
	}

	fn show_error(&mut self, indicator_id: &str) {
		if let Some(indicator) = self.html_element(indicator_id) {
			Self::set_display(&indicator, SHOWN);
		}
	}

	fn hide_errors(&mut self, indicator_class: &str) {
		let indicators = self.document.get_elements_by_class_name(indicator_class);
		for i in 0..indicators.length() {
			if let Some(indicator) = indicators
				.item(i)
				.and_then(|element| element.dyn_into::<HtmlElement>().ok())
			{
				Self::set_display(&indicator, HIDDEN);
			}
		}
	}

	fn focus(&mut self, field_id: &str) {
		if let Some(field) = self.html_element(field_id)
			&& let Err(err) = field.focus()
		{
			warn_log!("Failed to focus '{}': {:?}", field_id, err);
		}
	}

	fn select(&mut self, field_id: &str) {
		let Some(element) = self.element(field_id) else {
			return;
		};
		if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
			input.select();
		} else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
			textarea.select();
		}
	}

	fn confirm(&mut self, prompt: &str) -> bool {
		self.window.confirm_with_message(prompt).unwrap_or(false)
	}

	fn reset_form(&mut self, form_id: &str) {
		match self.form(form_id) {
			Ok(form) => form.reset(),
			Err(err) => warn_log!("Cannot reset contact form: {}", err),
		}
	}
}

//! DOM accessor tests in a real browser
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/contact-form-pages
//!
//! Each test renders the contact form markup into `document.body`, then drives
//! `DomFieldAccessor` through `FormValidator` and inspects the live DOM.

#![cfg(target_arch = "wasm32")]

use contact_form_core::{FieldAccessor, FormSettings, FormValidator};
use contact_form_pages::{DomFieldAccessor, events};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

const FORM_HTML: &str = r#"
<form id="contactForm">
	<input type="text" id="name">
	<p class="messageError" id="name_error">Name is required</p>
	<input type="text" id="email">
	<p class="messageError" id="email_error">Email is required</p>
	<p class="messageError" id="emailFormat_error">Email is invalid</p>
	<input type="text" id="phone">
	<p class="messageError" id="phone_error">Phone is required</p>
	<p class="messageError" id="phoneFormat_error">Phone must be 10 digits</p>
	<select id="subject">
		<option>-- choose --</option>
		<option>Sales</option>
		<option>Support</option>
	</select>
	<p class="messageError" id="subject_error">Choose a subject</p>
	<textarea id="message"></textarea>
	<p class="messageError" id="message_error">Message is required</p>
</form>
"#;

fn render() -> DomFieldAccessor {
	let accessor = DomFieldAccessor::from_window().expect("window should exist");
	accessor
		.document()
		.body()
		.expect("body should exist")
		.set_inner_html(FORM_HTML);
	accessor
}

fn input(accessor: &DomFieldAccessor, id: &str) -> HtmlInputElement {
	accessor
		.document()
		.get_element_by_id(id)
		.expect("input should exist")
		.dyn_into()
		.expect("element should be an input")
}

fn display(accessor: &DomFieldAccessor, id: &str) -> String {
	accessor
		.document()
		.get_element_by_id(id)
		.expect("indicator should exist")
		.dyn_into::<HtmlElement>()
		.expect("indicator should be an HTML element")
		.style()
		.get_property_value("display")
		.expect("display should be readable")
}

fn fill_valid(accessor: &DomFieldAccessor) {
	input(accessor, "name").set_value("Ada");
	input(accessor, "email").set_value("a@b.co");
	input(accessor, "phone").set_value("1234567890");
	accessor
		.document()
		.get_element_by_id("message")
		.expect("message should exist")
		.dyn_into::<web_sys::HtmlTextAreaElement>()
		.expect("message should be a textarea")
		.set_value("Hello");
	accessor
		.document()
		.get_element_by_id("subject")
		.expect("subject should exist")
		.dyn_into::<HtmlSelectElement>()
		.expect("subject should be a select")
		.set_selected_index(1);
}

#[wasm_bindgen_test]
fn test_reads_values_and_selection() {
	let mut accessor = render();
	input(&accessor, "name").set_value("Ada");

	assert_eq!(accessor.value("name").as_deref(), Some("Ada"));
	assert_eq!(accessor.value("message").as_deref(), Some(""));
	assert_eq!(accessor.selected_index("subject"), Some(0));
	assert_eq!(accessor.value("fax"), None);
}

#[wasm_bindgen_test]
fn test_submit_shows_indicators_and_focuses_first_field() {
	let accessor = render();
	let mut validator = FormValidator::new(accessor.clone());
	validator.hide_all_errors();

	assert!(validator.on_submit().is_cancelled());
	assert_eq!(display(&accessor, "name_error"), "block");
	assert_eq!(display(&accessor, "subject_error"), "block");
	assert_eq!(display(&accessor, "emailFormat_error"), "none");

	let active = accessor
		.document()
		.active_element()
		.expect("a field should have focus");
	assert_eq!(active.id(), "name");
}

#[wasm_bindgen_test]
fn test_valid_form_proceeds_and_hides_indicators() {
	let accessor = render();
	fill_valid(&accessor);
	let mut validator = FormValidator::new(accessor.clone());

	assert!(validator.on_submit().proceed);
	for id in ["name_error", "emailFormat_error", "subject_error"] {
		assert_eq!(display(&accessor, id), "none");
	}
}

#[wasm_bindgen_test]
fn test_load_resets_fields() {
	let accessor = render();
	input(&accessor, "name").set_value("Ada");
	let mut validator = FormValidator::with_settings(accessor.clone(), FormSettings::default());

	validator.on_load();

	assert_eq!(input(&accessor, "name").value(), "");
	assert_eq!(display(&accessor, "name_error"), "none");
}

#[wasm_bindgen_test]
fn test_mount_requires_form() {
	let accessor = render();
	let settings = FormSettings::default().with_form_id("missingForm");

	let result = events::mount(accessor, settings);

	assert!(matches!(
		result,
		Err(contact_form_pages::DomError::FormNotFound(id)) if id == "missingForm"
	));
}

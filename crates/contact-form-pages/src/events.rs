//! Attaching the validator to the page
//!
//! Mounting mirrors the page's load sequence:
//!
//! 1. `submit` listener attached
//! 2. [`FormValidator::on_load`]: indicators hidden, form reset
//! 3. `reset` listener attached
//!
//! The reset listener is attached last so the initial reset does not ask the
//! user for confirmation.

use crate::error::DomError;
use contact_form_core::FormSettings;

#[cfg(target_arch = "wasm32")]
use crate::dom::DomFieldAccessor;
#[cfg(target_arch = "wasm32")]
use contact_form_core::FormValidator;

/// DOM event names the adapter listens to.
pub const SUBMIT_EVENT: &str = "submit";
pub const RESET_EVENT: &str = "reset";
pub const READY_EVENT: &str = "DOMContentLoaded";

/// Attaches the contact form handlers, waiting for the document if it is
/// still loading.
#[cfg(target_arch = "wasm32")]
pub fn install(settings: FormSettings) -> Result<(), DomError> {
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;

	settings.validate()?;
	let accessor = DomFieldAccessor::from_window()?;

	if accessor.document().ready_state() != "loading" {
		return mount(accessor, settings);
	}

	let document = accessor.document().clone();
	let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		if let Err(err) = mount(accessor.clone(), settings.clone()) {
			crate::error_log!("Failed to mount contact form: {}", err);
		}
	}) as Box<dyn FnMut(_)>);

	document
		.add_event_listener_with_callback(READY_EVENT, closure.as_ref().unchecked_ref())
		.map_err(|err| DomError::Listener {
			event: READY_EVENT,
			reason: format!("{:?}", err),
		})?;

	closure.forget(); // Keep closure alive
	Ok(())
}

/// Attaches the contact form handlers (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn install(settings: FormSettings) -> Result<(), DomError> {
	settings.validate()?;
	Err(DomError::Unsupported)
}

/// Attaches the submit and reset listeners to a loaded document.
#[cfg(target_arch = "wasm32")]
pub fn mount(accessor: DomFieldAccessor, settings: FormSettings) -> Result<(), DomError> {
	let form = accessor.form(&settings.form_id)?;

	let mut submit_validator = FormValidator::with_settings(accessor.clone(), settings.clone());
	attach(&form, SUBMIT_EVENT, move |event| {
		if submit_validator.on_submit().is_cancelled() {
			event.prevent_default();
		}
	})?;

	let mut reset_validator = FormValidator::with_settings(accessor, settings);
	reset_validator.on_load();

	attach(&form, RESET_EVENT, move |event| {
		if reset_validator.on_reset().is_cancelled() {
			event.prevent_default();
		}
	})?;

	crate::info_log!("Contact form mounted on #{}", form.id());
	Ok(())
}

#[cfg(target_arch = "wasm32")]
fn attach(
	form: &web_sys::HtmlFormElement,
	event: &'static str,
	handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), DomError> {
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;

	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);

	form.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.map_err(|err| DomError::Listener {
			event,
			reason: format!("{:?}", err),
		})?;

	closure.forget(); // Keep closure alive
	Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_install_is_unsupported_on_native() {
		let result = install(FormSettings::default());
		assert!(matches!(result, Err(DomError::Unsupported)));
	}

	#[rstest]
	fn test_install_checks_settings_first() {
		let settings = FormSettings::default().with_form_id("");
		let result = install(settings);
		assert!(matches!(result, Err(DomError::Settings(_))));
	}
}

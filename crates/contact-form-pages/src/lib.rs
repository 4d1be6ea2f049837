//! Browser bindings for the contact form
//!
//! This crate attaches [`contact_form_core::FormValidator`] to a rendered
//! contact form:
//! - [`dom::DomFieldAccessor`] implements `FieldAccessor` with `web-sys`
//! - [`events::install`] wires the `submit` and `reset` listeners once the
//!   document is ready
//! - `installContactForm` / `installContactFormWith` are the JS entry points
//!
//! On native targets the DOM parts are compiled out and [`events::install`]
//! returns [`DomError::Unsupported`].
//!
//! ## Example
//!
//! ```ignore
//! import init, { installContactForm } from "./pkg/contact_form_pages.js";
//!
//! await init();
//! installContactForm();
//! ```

pub mod error;
pub mod events;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use contact_form_core::FormSettings;
pub use error::DomError;
pub use events::install;

#[cfg(target_arch = "wasm32")]
pub use dom::DomFieldAccessor;

use wasm_bindgen::prelude::*;

/// Attaches the validator to `#contactForm` with the default settings.
#[wasm_bindgen(js_name = installContactForm)]
pub fn install_contact_form() -> Result<(), JsValue> {
	set_panic_hook();
	install(FormSettings::default()).map_err(Into::into)
}

/// Attaches the validator using settings given as a JSON object.
#[wasm_bindgen(js_name = installContactFormWith)]
pub fn install_contact_form_with(settings_json: &str) -> Result<(), JsValue> {
	set_panic_hook();
	let settings = FormSettings::from_json(settings_json).map_err(DomError::from)?;
	install(settings).map_err(Into::into)
}

fn set_panic_hook() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
}

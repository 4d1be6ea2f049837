//! Browser bindings for the contact form
//!
//! Re-exports `contact-form-pages`. Build for `wasm32-unknown-unknown` and call
//! `installContactForm()` from the page once the module is initialised.

pub use contact_form_pages::*;

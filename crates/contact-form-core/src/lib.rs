//! Contact form validation core
//!
//! This crate holds everything about the contact form that does not depend on
//! a browser:
//! - The fixed field schema (`name`, `email`, `phone`, `message`, `subject`)
//! - Required-field and format predicates
//! - [`FormValidator`], which runs a validation pass against a [`FieldAccessor`]
//!   and drives the submit, reset and load handlers
//! - [`MemoryForm`], an in-memory host used by tests and non-browser callers
//!
//! The browser adapter lives in `contact-form-pages` and implements
//! [`FieldAccessor`] over `web-sys`.
//!
//! ## Example
//!
//! ```
//! use contact_form_core::{FormValidator, MemoryForm, ValidationError};
//!
//! let form = MemoryForm::filled().with_value("email", "foo@bar");
//! let mut validator = FormValidator::new(form);
//!
//! let outcome = validator.on_submit();
//! assert!(!outcome.proceed);
//! assert!(validator.accessor().is_error_visible("emailFormat_error"));
//! assert_eq!(validator.accessor().focused(), Some("email"));
//! ```

pub mod accessor;
pub mod error;
pub mod memory;
pub mod schema;
pub mod settings;
pub mod validator;
pub mod validators;

pub use accessor::FieldAccessor;
pub use error::{SettingsError, ValidationError};
pub use memory::{ErrorDisplayState, MemoryForm};
pub use schema::{CONTACT_FORM_FIELDS, FieldKind, FieldSpec, Format};
pub use settings::FormSettings;
pub use validator::{FormValidator, Outcome, ValidationResult};
pub use validators::{check_required, validate_email, validate_phone, validate_subject_selected};

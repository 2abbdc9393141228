//! Declarative validation for form fields.
//!
//! Each input carries a rule string such as `required|minLength:3|email`.
//! Validating a field runs those rules in order, shows the first failure next
//! to the field and clears it again once the value is fixed. A form is valid
//! when all of its rule-bearing fields are.
//!
//! ```
//! use easy_form_check::prelude::*;
//!
//! let mut doc = Document::new();
//! let form = doc.add_form("signup");
//! let email = doc
//!     .add_input(form, Input::new("email").rules("required|email").value("nope"))
//!     .unwrap();
//!
//! assert!(!validate_form(&mut doc, form).unwrap());
//! assert_eq!(
//!     doc.error_indicator(email).unwrap().message(),
//!     "Please enter a valid email."
//! );
//! ```

extern crate self as easy_form_check;

use once_cell::sync::Lazy;

pub mod prelude;

mod base;
mod dom;
mod errors;
mod events;
mod form;
mod presentation;
mod rules;
mod validator;

pub use base::{FieldOutcome, FieldValue, RuleCall, RuleSpec, display_name, humanize};
pub use dom::{
    ClassList, Container, ContainerId, Document, ErrorIndicator, Field, FieldId, FieldView, FormId,
    Input, InputType, ReadyState,
};
pub use errors::FormError;
pub use events::{Dispatch, EventBinder, FormEvent};
pub use form::FormModel;
pub use presentation::Theme;
pub use rules::{Rule, RuleSet};
pub use validator::{
    FormValidator, FormValidatorBuilder, PASSWORD_FIELD_NAMES, PASSWORDS_DO_NOT_MATCH,
};

static DEFAULT_VALIDATOR: Lazy<FormValidator> = Lazy::new(FormValidator::default);

/// Validates one field with the built-in rules and default theme.
pub fn validate_field(doc: &mut Document, field: FieldId) -> Result<bool, FormError> {
    DEFAULT_VALIDATOR.validate_field(doc, field)
}

/// Validates every rule-bearing field of `form`; `true` if all pass.
pub fn validate_form(doc: &mut Document, form: FormId) -> Result<bool, FormError> {
    DEFAULT_VALIDATOR.validate_form(doc, form)
}

pub fn show_error(doc: &mut Document, field: FieldId, message: &str) -> Result<(), FormError> {
    DEFAULT_VALIDATOR.show_error(doc, field, message)
}

pub fn clear_error(doc: &mut Document, field: FieldId) -> Result<(), FormError> {
    DEFAULT_VALIDATOR.clear_error(doc, field)
}

//! The `easy_form_check` prelude.

pub use crate::base::{FieldOutcome, FieldValue, RuleCall, RuleSpec};
pub use crate::dom::{Document, FieldId, FieldView, FormId, Input, InputType};
pub use crate::errors::FormError;
pub use crate::events::{Dispatch, EventBinder, FormEvent};
pub use crate::form::FormModel;
pub use crate::presentation::Theme;
pub use crate::rules::{Rule, RuleSet};
pub use crate::validator::FormValidator;
pub use crate::{clear_error, show_error, validate_field, validate_form};
pub use easy_form_check_macros::FormFields;

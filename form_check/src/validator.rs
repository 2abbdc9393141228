use crate::base::{FieldOutcome, RuleSpec};
use crate::dom::{Document, Field, FieldId, FieldView, InputType};
use crate::presentation::{self, Theme};
use crate::rules::{Rule, RuleSet};
use crate::FormError;

/// Names a confirmation field is compared against, in lookup order.
pub const PASSWORD_FIELD_NAMES: [&str; 3] = ["password", "new_password", "current_password"];

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// The rules and presentation tokens validation runs with.
///
/// A validator is immutable once built; extra rules are added through
/// [`FormValidator::builder`].
#[derive(Debug, Clone)]
pub struct FormValidator {
    rules: RuleSet,
    theme: Theme,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(RuleSet::builtin().clone(), Theme::default())
    }
}

impl FormValidator {
    pub fn new(rules: RuleSet, theme: Theme) -> Self {
        Self { rules, theme }
    }

    pub fn builder() -> FormValidatorBuilder {
        FormValidatorBuilder::default()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Works out the field's outcome without touching its presentation.
    ///
    /// Rules run in declaration order and the first failure wins. A password
    /// field whose name contains `confirm` is then compared with the first
    /// sibling named in [`PASSWORD_FIELD_NAMES`]; no sibling means no check.
    pub fn evaluate(&self, doc: &Document, field: FieldId) -> Result<FieldOutcome, FormError> {
        let input = doc.field(field)?;
        let display_name = input.display_name();
        let spec = RuleSpec::parse(input.rule_spec().unwrap_or_default());

        for call in spec.iter() {
            if let Err(message) = self.rules.apply(call, input.value(), &display_name) {
                log::debug!(
                    "[validate_field] {} ({}) failed rule '{}': {}",
                    field,
                    display_name,
                    call,
                    message
                );
                return Ok(FieldOutcome::Invalid(message));
            }
        }

        if confirmation_mismatch(doc, input)? {
            log::debug!("[validate_field] {} ({}) does not match its password", field, display_name);
            return Ok(FieldOutcome::Invalid(PASSWORDS_DO_NOT_MATCH.to_string()));
        }

        Ok(FieldOutcome::Valid)
    }

    /// Validates one field and renders the result: any old indicator is
    /// cleared first, and a failure shows its message. Returns `true` if valid.
    pub fn validate_field(&self, doc: &mut Document, field: FieldId) -> Result<bool, FormError> {
        self.clear_error(doc, field)?;
        match self.evaluate(doc, field)? {
            FieldOutcome::Valid => Ok(true),
            FieldOutcome::Invalid(message) => {
                self.show_error(doc, field, &message)?;
                Ok(false)
            }
        }
    }

    /// Same as [`validate_field`](Self::validate_field) but reports a failure
    /// as `FormError::ValidationFailed`, for callers that want `?`.
    pub fn check_field(&self, doc: &mut Document, field: FieldId) -> Result<(), FormError> {
        if self.validate_field(doc, field)? {
            return Ok(());
        }
        let name = doc.field(field)?.display_name();
        let message = doc
            .error_indicator(field)
            .map(|i| i.message().clone())
            .unwrap_or_default();
        Err(FormError::ValidationFailed {
            field: name,
            message,
        })
    }

    pub fn show_error(
        &self,
        doc: &mut Document,
        field: FieldId,
        message: &str,
    ) -> Result<(), FormError> {
        presentation::show_error(doc, &self.theme, field, message)
    }

    pub fn clear_error(&self, doc: &mut Document, field: FieldId) -> Result<(), FormError> {
        presentation::clear_error(doc, &self.theme, field)
    }

    pub fn has_error(&self, doc: &Document, field: FieldId) -> Result<bool, FormError> {
        presentation::has_error(doc, &self.theme, field)
    }
}

fn confirmation_mismatch(doc: &Document, input: &Field) -> Result<bool, FormError> {
    let is_confirmation = input.input_type() == InputType::Password
        && input.name().is_some_and(|name| name.contains("confirm"));
    if !is_confirmation {
        return Ok(false);
    }

    let sibling = PASSWORD_FIELD_NAMES
        .iter()
        .find_map(|name| doc.field_named(input.form(), name));
    match sibling {
        Some(sibling) => {
            let expected = doc.field(sibling)?.value().unwrap_or_default();
            Ok(input.value().unwrap_or_default() != expected)
        }
        None => Ok(false),
    }
}

/// Builds a [`FormValidator`] on top of the built-in rules.
#[derive(Debug, Default)]
pub struct FormValidatorBuilder {
    rules: Option<RuleSet>,
    theme: Theme,
    error: Option<FormError>,
}

impl FormValidatorBuilder {
    /// Replaces the base rule set (the built-in rules by default).
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Registers an extra named rule. Reusing a name fails the build.
    pub fn rule(mut self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        let rules = self
            .rules
            .get_or_insert_with(|| RuleSet::builtin().clone());
        if let Err(e) = rules.register(name, rule) {
            self.error.get_or_insert(e);
        }
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn build(self) -> Result<FormValidator, FormError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let rules = self.rules.unwrap_or_else(|| RuleSet::builtin().clone());
        Ok(FormValidator::new(rules, self.theme))
    }
}

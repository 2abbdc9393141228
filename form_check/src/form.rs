use crate::base::FieldOutcome;
use crate::dom::{Document, FieldId, FieldView, FormId, Input};
use crate::validator::FormValidator;
use crate::FormError;

impl FormValidator {
    /// Inputs of `form` that declare a rule spec, in document order.
    pub fn rule_bearing_fields(
        &self,
        doc: &Document,
        form: FormId,
    ) -> Result<Vec<FieldId>, FormError> {
        let mut fields = Vec::new();
        for &field in doc.fields_of(form)? {
            if doc.field(field)?.has_rules() {
                fields.push(field);
            }
        }
        Ok(fields)
    }

    /// Validates every rule-bearing field of the form and renders each result.
    ///
    /// There is no short-circuit: all fields are checked so every failure is
    /// visible at once. Returns `true` only if all of them passed.
    pub fn validate_form(&self, doc: &mut Document, form: FormId) -> Result<bool, FormError> {
        let mut all_valid = true;
        for field in self.rule_bearing_fields(doc, form)? {
            all_valid &= self.validate_field(doc, field)?;
        }
        log::debug!(
            "[validate_form] '{}' is {}",
            doc.form_name(form)?,
            if all_valid { "valid" } else { "invalid" }
        );
        Ok(all_valid)
    }

    /// Outcome of every rule-bearing field, without rendering anything.
    pub fn evaluate_form(
        &self,
        doc: &Document,
        form: FormId,
    ) -> Result<Vec<(FieldId, FieldOutcome)>, FormError> {
        self.rule_bearing_fields(doc, form)?
            .into_iter()
            .map(|field| Ok((field, self.evaluate(doc, field)?)))
            .collect()
    }

    /// The first field of the form, in document order, currently marked in error.
    pub fn first_invalid(&self, doc: &Document, form: FormId) -> Result<Option<FieldId>, FormError> {
        for &field in doc.fields_of(form)? {
            if self.has_error(doc, field)? {
                return Ok(Some(field));
            }
        }
        Ok(None)
    }
}

/// A typed value that can be laid out as a form.
///
/// Usually implemented with `#[derive(FormFields)]`.
pub trait FormModel {
    fn inputs(&self) -> Vec<Input>;

    /// Adds a form named `form_name` with one group per input.
    fn mount(&self, doc: &mut Document, form_name: &str) -> Result<FormId, FormError> {
        let form = doc.add_form(form_name);
        for input in self.inputs() {
            doc.add_input(form, input)?;
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::InputType;

    fn signup(doc: &mut Document) -> (FormId, Vec<FieldId>) {
        let form = doc.add_form("signup");
        let inputs = vec![
            Input::new("full_name").rules("required"),
            Input::new("nickname"),
            Input::new("email").rules("required|email").value("bad@"),
            Input::new("phone").rules("phone").value("555-123-4567"),
        ];
        let ids = inputs
            .into_iter()
            .map(|input| doc.add_input(form, input).unwrap())
            .collect();
        (form, ids)
    }

    #[test]
    fn test_validate_form_checks_every_field() {
        let validator = FormValidator::default();
        let mut doc = Document::new();
        let (form, ids) = signup(&mut doc);

        assert_eq!(
            validator.rule_bearing_fields(&doc, form).unwrap(),
            vec![ids[0], ids[2], ids[3]]
        );
        assert!(!validator.validate_form(&mut doc, form).unwrap());
        assert_eq!(doc.indicator_count(), 2);
        assert_eq!(
            doc.error_indicator(ids[0]).unwrap().message(),
            "Full Name is required."
        );
        assert_eq!(
            doc.error_indicator(ids[2]).unwrap().message(),
            "Please enter a valid email."
        );
        assert_eq!(validator.first_invalid(&doc, form).unwrap(), Some(ids[0]));
    }

    #[test]
    fn test_validate_form_passes_when_all_fields_pass() {
        let validator = FormValidator::default();
        let mut doc = Document::new();
        let (form, ids) = signup(&mut doc);
        doc.set_value(ids[0], "Ada Lovelace").unwrap();
        doc.set_value(ids[2], "ada@example.com").unwrap();

        assert!(validator.validate_form(&mut doc, form).unwrap());
        assert_eq!(doc.indicator_count(), 0);
        assert_eq!(validator.first_invalid(&doc, form).unwrap(), None);
    }

    #[test]
    fn test_empty_form_is_valid() {
        let validator = FormValidator::default();
        let mut doc = Document::new();
        let form = doc.add_form("empty");
        assert!(validator.validate_form(&mut doc, form).unwrap());
    }

    #[test]
    fn test_validate_form_only_touches_its_own_fields() {
        let validator = FormValidator::default();
        let mut doc = Document::new();
        let (form, _) = signup(&mut doc);
        let other = doc.add_form("search");
        let query = doc
            .add_input(other, Input::new("q").rules("required"))
            .unwrap();

        validator.validate_form(&mut doc, form).unwrap();
        assert!(doc.error_indicator(query).is_none());
    }

    #[test]
    fn test_evaluate_form_renders_nothing() {
        let validator = FormValidator::default();
        let mut doc = Document::new();
        let (form, ids) = signup(&mut doc);

        let outcomes = validator.evaluate_form(&doc, form).unwrap();

        assert_eq!(
            outcomes,
            vec![
                (
                    ids[0],
                    FieldOutcome::Invalid("Full Name is required.".to_string())
                ),
                (
                    ids[2],
                    FieldOutcome::Invalid("Please enter a valid email.".to_string())
                ),
                (ids[3], FieldOutcome::Valid),
            ]
        );
        assert_eq!(doc.indicator_count(), 0);
    }

    #[test]
    fn test_unknown_form() {
        let validator = FormValidator::default();
        let mut doc = Document::new();
        let mut other = Document::new();
        other.add_form("a");
        let form = other.add_form("b");

        let res = validator.validate_form(&mut doc, form);
        assert!(
            matches!(&res, Err(FormError::UnknownForm(id)) if id == "form#1"),
            "Expected UnknownForm error, but got {:?}",
            &res
        );
    }

    #[test]
    fn test_mount_model() {
        struct Login;

        impl FormModel for Login {
            fn inputs(&self) -> Vec<Input> {
                vec![
                    Input::new("email").rules("required|email"),
                    Input::new("password")
                        .kind(InputType::Password)
                        .rules("required|password"),
                ]
            }
        }

        let mut doc = Document::new();
        let form = Login.mount(&mut doc, "login").unwrap();

        assert_eq!(doc.form_name(form).unwrap(), "login");
        assert_eq!(doc.fields_of(form).unwrap().len(), 2);
        assert!(!FormValidator::default().validate_form(&mut doc, form).unwrap());
        assert_eq!(doc.indicator_count(), 2);
    }
}

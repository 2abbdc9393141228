use crate::dom::{Document, ErrorIndicator, FieldId, FieldView};
use crate::FormError;

/// Presentation tokens written into the document. They carry no behaviour
/// beyond marking whether a field currently has an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub invalid_class: String,
    pub valid_class: String,
    pub indicator_class: String,
    pub icon: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            invalid_class: "is-invalid".to_string(),
            valid_class: "is-valid".to_string(),
            indicator_class: "invalid-feedback".to_string(),
            icon: "\u{26A0}".to_string(),
        }
    }
}

/// Shows `message` next to the field. An existing indicator in the field's
/// container is updated in place, so a container never holds two.
pub fn show_error(
    doc: &mut Document,
    theme: &Theme,
    field: FieldId,
    message: &str,
) -> Result<(), FormError> {
    let container = {
        let field = doc.field_mut(field)?;
        let classes = field.classes_mut();
        classes.add(&theme.invalid_class);
        classes.remove(&theme.valid_class);
        field.container()
    };

    let slot = doc.container_mut(container)?.indicator_mut();
    if let Some(indicator) = slot.as_mut() {
        indicator.set_message(message);
    } else {
        *slot = Some(ErrorIndicator::new(
            &theme.indicator_class,
            &theme.icon,
            message,
        ));
    }
    Ok(())
}

/// Drops the field's error marker and removes its container's indicator.
/// The indicator stays while another input in the same container is still in error.
pub fn clear_error(doc: &mut Document, theme: &Theme, field: FieldId) -> Result<(), FormError> {
    let container = {
        let field = doc.field_mut(field)?;
        let classes = field.classes_mut();
        classes.remove(&theme.invalid_class);
        classes.remove(&theme.valid_class);
        field.container()
    };
    let sibling_in_error = doc
        .fields_in(container)
        .filter(|&other| other != field)
        .any(|other| has_error(doc, theme, other).unwrap_or(false));
    if !sibling_in_error {
        doc.container_mut(container)?.indicator_mut().take();
    }
    Ok(())
}

/// `true` while the field carries the error marker.
pub fn has_error(doc: &Document, theme: &Theme, field: FieldId) -> Result<bool, FormError> {
    Ok(doc.field(field)?.classes().contains(&theme.invalid_class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Input;

    fn single_field() -> (Document, FieldId) {
        let mut doc = Document::new();
        let form = doc.add_form("f");
        let field = doc.add_input(form, Input::new("email")).unwrap();
        (doc, field)
    }

    #[test]
    fn test_show_error_twice_keeps_one_indicator() {
        let theme = Theme::default();
        let (mut doc, field) = single_field();

        show_error(&mut doc, &theme, field, "first").unwrap();
        show_error(&mut doc, &theme, field, "second").unwrap();

        assert_eq!(doc.indicator_count(), 1);
        let indicator = doc.error_indicator(field).unwrap();
        assert_eq!(indicator.message(), "second");
        assert_eq!(indicator.class(), "invalid-feedback");
        assert_eq!(indicator.text(), "\u{26A0} second");
        assert!(has_error(&doc, &theme, field).unwrap());
    }

    #[test]
    fn test_show_error_replaces_valid_marker() {
        let theme = Theme::default();
        let (mut doc, field) = single_field();
        doc.field_mut(field).unwrap().classes_mut().add("is-valid");

        show_error(&mut doc, &theme, field, "bad").unwrap();

        let classes = doc.field(field).unwrap().classes();
        assert!(classes.contains("is-invalid"));
        assert!(!classes.contains("is-valid"));
    }

    #[test]
    fn test_clear_error_is_idempotent() {
        let theme = Theme::default();
        let (mut doc, field) = single_field();

        clear_error(&mut doc, &theme, field).unwrap();
        clear_error(&mut doc, &theme, field).unwrap();
        assert_eq!(doc.indicator_count(), 0);

        show_error(&mut doc, &theme, field, "bad").unwrap();
        clear_error(&mut doc, &theme, field).unwrap();
        clear_error(&mut doc, &theme, field).unwrap();
        assert_eq!(doc.indicator_count(), 0);
        assert!(doc.field(field).unwrap().classes().is_empty());
        assert!(!has_error(&doc, &theme, field).unwrap());
    }

    #[test]
    fn test_clear_error_keeps_indicator_of_sibling_in_error() {
        let theme = Theme::default();
        let mut doc = Document::new();
        let form = doc.add_form("f");
        let group = doc.add_group(form).unwrap();
        let first = doc.add_input_in(group, Input::new("first")).unwrap();
        let last = doc.add_input_in(group, Input::new("last")).unwrap();

        show_error(&mut doc, &theme, first, "First is required.").unwrap();
        clear_error(&mut doc, &theme, last).unwrap();
        assert_eq!(doc.indicator_count(), 1);
        assert_eq!(
            doc.error_indicator(last).unwrap().message(),
            "First is required."
        );

        clear_error(&mut doc, &theme, first).unwrap();
        assert_eq!(doc.indicator_count(), 0);
    }

    #[test]
    fn test_custom_theme_tokens() {
        let theme = Theme {
            invalid_class: "error".to_string(),
            indicator_class: "field-error".to_string(),
            icon: "!".to_string(),
            ..Theme::default()
        };
        let (mut doc, field) = single_field();

        show_error(&mut doc, &theme, field, "Nope.").unwrap();

        assert!(doc.field(field).unwrap().classes().contains("error"));
        let indicator = doc.error_indicator(field).unwrap();
        assert_eq!(indicator.class(), "field-error");
        assert_eq!(indicator.icon(), "!");
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FormError {
    #[error("Unknown field: '{0}'")]
    UnknownField(String),
    #[error("Unknown form: '{0}'")]
    UnknownForm(String),
    #[error("Unknown container: '{0}'")]
    UnknownContainer(String),
    #[error("Rule '{0}' is defined twice.")]
    DuplicateRule(String),
    #[error("Unrecognized rule '{rule}' on field '{field}'")]
    UnknownRule { field: String, rule: String },
    #[error("Validation failed for field '{field}': {message}")]
    ValidationFailed { field: String, message: String },
}

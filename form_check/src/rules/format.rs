use crate::base::{is_numeric, leading_float};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

const MIN_PHONE_DIGITS: usize = 10;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Format check for `local@domain.tld`; empty values pass.
pub(crate) fn email(value: Option<&str>, field: &str, _params: &[String]) -> Result<(), String> {
    match non_empty(value) {
        Some(v) if !EMAIL_PATTERN.is_match(v) => {
            Err(format!("Please enter a valid {}.", field.to_lowercase()))
        }
        _ => Ok(()),
    }
}

/// Whitespace, `-`, `(`, `)` and `+` are separators; what remains must be
/// at least ten ASCII digits.
pub(crate) fn phone(value: Option<&str>, field: &str, _params: &[String]) -> Result<(), String> {
    let Some(v) = non_empty(value) else {
        return Ok(());
    };
    let digits: String = v
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')))
        .collect();
    let all_digits = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
    if all_digits && digits.len() >= MIN_PHONE_DIGITS {
        Ok(())
    } else {
        Err(format!("Please enter a valid {}.", field.to_lowercase()))
    }
}

pub(crate) fn number(value: Option<&str>, field: &str, _params: &[String]) -> Result<(), String> {
    match non_empty(value) {
        Some(v) if !is_numeric(v) => Err(format!("{} must be a valid number.", field)),
        _ => Ok(()),
    }
}

/// Reads the leading number of the value; values without one are left to `number`.
pub(crate) fn positive(value: Option<&str>, field: &str, _params: &[String]) -> Result<(), String> {
    match non_empty(value).and_then(leading_float) {
        Some(n) if n <= 0.0 => Err(format!("{} must be a positive number.", field)),
        _ => Ok(()),
    }
}

use crate::impl_field_value_for_display;
use std::fmt::{self, Display};

mod macros;

/// A single rule invocation taken from a rule-specification string.
///
/// `minLength:8` becomes `RuleCall { name: "minLength", params: ["8"] }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCall {
    pub name: String,
    pub params: Vec<String>,
}

impl RuleCall {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

impl Display for RuleCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.params {
            write!(f, ":{}", param)?;
        }
        Ok(())
    }
}

/// The ordered list of rule invocations declared on a field.
///
/// The declarative form is a pipe-delimited list of colon-delimited tokens,
/// `ruleName:param1:param2|ruleName2`. A spec is parsed fresh every time a
/// field is validated; nothing about it is cached on the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSpec {
    calls: Vec<RuleCall>,
}

impl RuleSpec {
    /// Parses a rule-specification string. Never fails: blank tokens are
    /// dropped and unknown rule names are kept so that the rule set can skip them.
    pub fn parse(raw: &str) -> Self {
        let calls = raw
            .split('|')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                let mut parts = token.split(':').map(|p| p.trim().to_string());
                // `split` always yields at least one item.
                let name = parts.next().unwrap_or_default();
                RuleCall::new(name, parts.collect())
            })
            .filter(|call| !call.name.is_empty())
            .collect();
        Self { calls }
    }

    pub fn calls(&self) -> &[RuleCall] {
        &self.calls
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleCall> {
        self.calls.iter()
    }
}

impl Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.calls.iter().map(ToString::to_string).collect();
        write!(f, "{}", tokens.join("|"))
    }
}

/// Result of validating one field. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Valid,
    Invalid(String),
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldOutcome::Valid => None,
            FieldOutcome::Invalid(message) => Some(message),
        }
    }
}

/// Turns an identifier such as `first_name` into `First Name`.
///
/// Underscores become spaces and every letter that starts a word is upper-cased.
/// Other characters are left as they are.
pub fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_word = false;
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = c.is_alphanumeric();
    }
    out
}

/// Resolves the name used in messages: the explicit label, else the humanized
/// name, else the humanized id, else `"Field"`. Empty strings count as absent.
pub fn display_name(label: Option<&str>, name: Option<&str>, id: Option<&str>) -> String {
    fn present(s: Option<&str>) -> Option<&str> {
        s.filter(|s| !s.is_empty())
    }
    if let Some(label) = present(label) {
        return label.to_string();
    }
    present(name)
        .or(present(id))
        .map(humanize)
        .unwrap_or_else(|| "Field".to_string())
}

/// Length in bytes of the decimal number literal at the start of `s`
/// (optional sign, digits, fraction, exponent, or `Infinity`). Zero if none.
fn scan_number(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return end + "Infinity".len();
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

fn parse_number_literal(literal: &str) -> Option<f64> {
    match literal.trim_start_matches('+') {
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        other => other.parse().ok(),
    }
}

/// Reads the decimal number at the start of `s`, ignoring leading whitespace
/// and any trailing garbage: `"12.5kg"` reads as `12.5`.
pub(crate) fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let len = scan_number(s);
    if len == 0 {
        return None;
    }
    parse_number_literal(&s[..len])
}

/// Reads the integer at the start of `s`: `"10px"` reads as `10`.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// `true` when the whole trimmed value is one number literal.
pub(crate) fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    let len = scan_number(trimmed);
    len > 0 && len == trimmed.len()
}

/// Converts a typed struct field into the string value of an input.
///
/// Used by `#[derive(FormFields)]`; `None` means the input has no value at all.
pub trait FieldValue {
    fn to_field_value(&self) -> Option<String>;
}

impl FieldValue for String {
    fn to_field_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl FieldValue for &str {
    fn to_field_value(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_field_value(&self) -> Option<String> {
        self.as_ref().and_then(FieldValue::to_field_value)
    }
}

impl_field_value_for_display!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

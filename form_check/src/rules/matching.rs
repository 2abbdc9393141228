/// `match:<matchValue>[:<matchField>]`. Fails whenever the value differs from
/// `matchValue`; a missing `matchValue` never matches. An absent value compares
/// as the empty string.
pub(crate) fn matches(value: Option<&str>, field: &str, params: &[String]) -> Result<(), String> {
    if let Some(expected) = params.first()
        && value.unwrap_or("") == expected.as_str()
    {
        return Ok(());
    }
    let target = params
        .get(1)
        .map(String::as_str)
        .unwrap_or("the confirmation");
    Err(format!("{} does not match {}.", field, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_match() {
        assert_eq!(matches(Some("x"), "Code", &params(&["x"])), Ok(()));
        assert_eq!(
            matches(Some("x"), "Code", &params(&["y"])),
            Err("Code does not match the confirmation.".to_string())
        );
        assert_eq!(
            matches(Some("x"), "Email", &params(&["y", "Email Confirmation"])),
            Err("Email does not match Email Confirmation.".to_string())
        );
        assert_eq!(matches(Some(""), "Code", &params(&[""])), Ok(()));
        assert_eq!(matches(None, "Code", &params(&[""])), Ok(()));
    }

    #[test]
    fn test_match_without_expected_value() {
        assert!(matches(Some("x"), "Code", &[]).is_err());
        assert!(matches(Some(""), "Code", &[]).is_err());
        assert!(matches(None, "Code", &[]).is_err());
    }
}

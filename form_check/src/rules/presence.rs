/// Fails when the value is absent or blank after trimming. `"0"` is a value.
pub(crate) fn required(value: Option<&str>, field: &str, _params: &[String]) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(format!("{} is required.", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            assert_eq!(
                required(value, "Name", &[]),
                Err("Name is required.".to_string()),
                "Expected failure for {:?}",
                value
            );
        }
        for value in ["0", "a", "  x  ", "false"] {
            assert_eq!(required(Some(value), "Name", &[]), Ok(()));
        }
    }
}

use crate::base::leading_int;

const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 128;

/// Length in characters of a present, non-empty value.
fn present_len(value: Option<&str>) -> Option<usize> {
    value.filter(|v| !v.is_empty()).map(|v| v.chars().count())
}

fn limit(params: &[String]) -> Option<i64> {
    params.first().and_then(|p| leading_int(p))
}

/// `minLength:<min>`. A missing or unreadable bound never fails.
pub(crate) fn min_length(value: Option<&str>, field: &str, params: &[String]) -> Result<(), String> {
    match (present_len(value), limit(params)) {
        (Some(len), Some(min)) if (len as i64) < min => Err(format!(
            "{} must be at least {} characters long.",
            field, min
        )),
        _ => Ok(()),
    }
}

/// `maxLength:<max>`. A missing or unreadable bound never fails.
pub(crate) fn max_length(value: Option<&str>, field: &str, params: &[String]) -> Result<(), String> {
    match (present_len(value), limit(params)) {
        (Some(len), Some(max)) if (len as i64) > max => {
            Err(format!("{} must not exceed {} characters.", field, max))
        }
        _ => Ok(()),
    }
}

pub(crate) fn password(value: Option<&str>, field: &str, _params: &[String]) -> Result<(), String> {
    match present_len(value) {
        Some(len) if len < PASSWORD_MIN => Err(format!(
            "{} must be at least {} characters long.",
            field, PASSWORD_MIN
        )),
        Some(len) if len > PASSWORD_MAX => Err(format!(
            "{} is too long (maximum {} characters).",
            field, PASSWORD_MAX
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_min_length() {
        let min = params(&["3"]);
        let res = min_length(Some("ab"), "Username", &min);
        assert!(
            matches!(&res, Err(message) if message.contains("at least 3")),
            "Expected failure but got {:?}",
            &res
        );
        assert_eq!(
            res.unwrap_err(),
            "Username must be at least 3 characters long."
        );
        assert_eq!(min_length(Some("abc"), "Username", &min), Ok(()));
        assert_eq!(min_length(Some(""), "Username", &min), Ok(()));
        assert_eq!(min_length(None, "Username", &min), Ok(()));
        // Characters, not bytes.
        assert_eq!(min_length(Some("äöü"), "Username", &min), Ok(()));
    }

    #[test]
    fn test_min_length_lenient_bound() {
        assert_eq!(min_length(Some("a"), "Code", &[]), Ok(()));
        assert_eq!(min_length(Some("a"), "Code", &params(&["abc"])), Ok(()));
        assert!(min_length(Some("a"), "Code", &params(&["4chars"])).is_err());
    }

    #[test]
    fn test_max_length() {
        let max = params(&["5"]);
        assert_eq!(max_length(Some("12345"), "Zip", &max), Ok(()));
        assert_eq!(
            max_length(Some("123456"), "Zip", &max),
            Err("Zip must not exceed 5 characters.".to_string())
        );
        assert_eq!(max_length(None, "Zip", &max), Ok(()));
        assert_eq!(max_length(Some("123456"), "Zip", &[]), Ok(()));
    }

    #[test]
    fn test_password() {
        assert_eq!(password(None, "Password", &[]), Ok(()));
        assert_eq!(password(Some(""), "Password", &[]), Ok(()));
        assert_eq!(
            password(Some("abc"), "Password", &[]),
            Err("Password must be at least 6 characters long.".to_string())
        );
        assert_eq!(password(Some("abcdef"), "Password", &[]), Ok(()));
        assert_eq!(password(Some(&"x".repeat(128)), "Password", &[]), Ok(()));
        assert_eq!(
            password(Some(&"x".repeat(129)), "Password", &[]),
            Err("Password is too long (maximum 128 characters).".to_string())
        );
    }
}

use faultline_config::DEFAULT_PASSWORD_MIN_LENGTH;
use faultline_core::ClassifiedError;

const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Validate password strength
///
/// Checks run in a fixed order and the first failure is returned: empty,
/// length (in characters, `0` meaning the default of 8), then one each of
/// uppercase, lowercase, digit and special character.
///
/// # Errors
///
/// Returns a `Validation` error with code `SENHA_VAZIA`, `SENHA_MUITO_CURTA`,
/// `SENHA_SEM_MAIUSCULA`, `SENHA_SEM_MINUSCULA`, `SENHA_SEM_NUMERO` or
/// `SENHA_SEM_ESPECIAL`
pub fn validate_password(password: &str, min_length: usize) -> Result<(), ClassifiedError> {
    if password.is_empty() {
        return Err(ClassifiedError::validation("SENHA_VAZIA", "Password must not be empty"));
    }

    let min_length = if min_length == 0 { DEFAULT_PASSWORD_MIN_LENGTH } else { min_length };
    let length = password.chars().count();
    if length < min_length {
        return Err(ClassifiedError::validation(
            "SENHA_MUITO_CURTA",
            format!("Password must have at least {min_length} characters"),
        )
        .with_detail(format!("Current length: {length}")));
    }

    let requirements: [(&str, &str, fn(char) -> bool); 4] = [
        (
            "SENHA_SEM_MAIUSCULA",
            "Password must contain at least one uppercase letter",
            |c| c.is_ascii_uppercase(),
        ),
        (
            "SENHA_SEM_MINUSCULA",
            "Password must contain at least one lowercase letter",
            |c| c.is_ascii_lowercase(),
        ),
        ("SENHA_SEM_NUMERO", "Password must contain at least one digit", |c| c.is_ascii_digit()),
        (
            "SENHA_SEM_ESPECIAL",
            "Password must contain at least one special character",
            |c| SPECIAL_CHARACTERS.contains(c),
        ),
    ];

    for (code, message, satisfies) in requirements {
        if !password.chars().any(satisfies) {
            return Err(ClassifiedError::validation(code, message));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(password: &str) -> String {
        validate_password(password, 0).unwrap_err().code().to_owned()
    }

    #[test]
    fn failures_follow_check_order() {
        assert_eq!(code(""), "SENHA_VAZIA");
        assert_eq!(code("abc"), "SENHA_MUITO_CURTA");
        assert_eq!(code("abcdefgh"), "SENHA_SEM_MAIUSCULA");
        assert_eq!(code("ABCDEFGH"), "SENHA_SEM_MINUSCULA");
        assert_eq!(code("Abcdefgh"), "SENHA_SEM_NUMERO");
        assert_eq!(code("Abcdefg1"), "SENHA_SEM_ESPECIAL");
    }

    #[test]
    fn strong_password_passes() {
        assert!(validate_password("Abcdefg1!", 0).is_ok());
        assert!(validate_password("Abcdefg1!", 8).is_ok());
    }

    #[test]
    fn short_password_reports_length() {
        let error = validate_password("Ab1!", 0).unwrap_err();
        assert_eq!(error.message(), "Password must have at least 8 characters");
        assert_eq!(error.detail(), Some("Current length: 4"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let error = validate_password("Áé1!xyz", 8).unwrap_err();
        assert_eq!(error.detail(), Some("Current length: 7"));
    }

    #[test]
    fn custom_minimum_is_respected() {
        assert_eq!(validate_password("Abcdefg1!", 12).unwrap_err().code(), "SENHA_MUITO_CURTA");
    }
}

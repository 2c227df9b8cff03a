//! Generic field checks shared by request handlers

use std::fmt;
use std::sync::OnceLock;

use faultline_core::ClassifiedError;
use regex::Regex;

fn uuid_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").expect("must be valid regex")
    })
}

/// Validate a hyphenated UUID, case-insensitive
///
/// # Errors
///
/// Returns a `Validation` error with code `UUID_VAZIO` or `UUID_FORMATO_INVALIDO`
pub fn validate_uuid(uuid: &str) -> Result<(), ClassifiedError> {
    if uuid.is_empty() {
        return Err(ClassifiedError::validation("UUID_VAZIO", "UUID must not be empty"));
    }

    if !uuid_pattern().is_match(uuid) {
        return Err(ClassifiedError::validation("UUID_FORMATO_INVALIDO", "Invalid UUID format")
            .with_detail(format!("Provided UUID: {uuid}")));
    }

    Ok(())
}

/// Validate a numeric identifier, which must be positive
///
/// # Errors
///
/// Returns a `Validation` error with code `ID_INVALIDO`
pub fn validate_id(id: i64, resource: impl fmt::Display) -> Result<(), ClassifiedError> {
    if id <= 0 {
        return Err(ClassifiedError::validation("ID_INVALIDO", format!("Invalid {resource} ID"))
            .with_detail(format!("ID must be positive, got {id}")));
    }
    Ok(())
}

/// Validate that a field is not blank
///
/// # Errors
///
/// Returns a `Validation` error with code `CAMPO_OBRIGATORIO`
pub fn validate_required(value: &str, field: &str) -> Result<(), ClassifiedError> {
    if value.trim().is_empty() {
        return Err(ClassifiedError::validation("CAMPO_OBRIGATORIO", format!("Field {field} is required")));
    }
    Ok(())
}

/// Validate a field's length in characters, bounds inclusive
///
/// A `max` of 0 leaves the length unbounded.
///
/// # Errors
///
/// Returns a `Validation` error with code `CAMPO_MUITO_CURTO` or `CAMPO_MUITO_LONGO`
pub fn validate_length(value: &str, field: &str, min: usize, max: usize) -> Result<(), ClassifiedError> {
    let length = value.chars().count();

    if length < min {
        return Err(ClassifiedError::validation(
            "CAMPO_MUITO_CURTO",
            format!("Field {field} must have at least {min} characters"),
        )
        .with_detail(format!("Current length: {length}")));
    }

    if max > 0 && length > max {
        return Err(ClassifiedError::validation(
            "CAMPO_MUITO_LONGO",
            format!("Field {field} must have at most {max} characters"),
        )
        .with_detail(format!("Current length: {length}")));
    }

    Ok(())
}

/// Validate that a number is strictly positive
///
/// # Errors
///
/// Returns a `Validation` error with code `NUMERO_DEVE_SER_POSITIVO`
pub fn validate_positive(value: f64, field: &str) -> Result<(), ClassifiedError> {
    if value <= 0.0 || value.is_nan() {
        return Err(ClassifiedError::validation(
            "NUMERO_DEVE_SER_POSITIVO",
            format!("Field {field} must be positive"),
        )
        .with_detail(format!("Provided value: {value}")));
    }
    Ok(())
}

/// Validate that a number lies within `min..=max`
///
/// # Errors
///
/// Returns a `Validation` error with code `NUMERO_ABAIXO_MINIMO` or `NUMERO_ACIMA_MAXIMO`
pub fn validate_range(value: f64, min: f64, max: f64, field: &str) -> Result<(), ClassifiedError> {
    if value < min {
        return Err(ClassifiedError::validation(
            "NUMERO_ABAIXO_MINIMO",
            format!("Field {field} must be at least {min}"),
        )
        .with_detail(format!("Provided value: {value}")));
    }

    if value > max {
        return Err(ClassifiedError::validation(
            "NUMERO_ACIMA_MAXIMO",
            format!("Field {field} must be at most {max}"),
        )
        .with_detail(format!("Provided value: {value}")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_is_case_insensitive() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("550E8400-E29B-41D4-A716-446655440000").is_ok());
    }

    #[test]
    fn uuid_failures() {
        assert_eq!(validate_uuid("").unwrap_err().code(), "UUID_VAZIO");
        assert_eq!(validate_uuid("not-a-uuid").unwrap_err().code(), "UUID_FORMATO_INVALIDO");
        assert_eq!(
            validate_uuid("550e8400e29b41d4a716446655440000").unwrap_err().code(),
            "UUID_FORMATO_INVALIDO"
        );
    }

    #[test]
    fn id_must_be_positive() {
        assert!(validate_id(1, "user").is_ok());

        let error = validate_id(0, "user").unwrap_err();
        assert_eq!(error.code(), "ID_INVALIDO");
        assert_eq!(error.message(), "Invalid user ID");
        assert_eq!(error.detail(), Some("ID must be positive, got 0"));
    }

    #[test]
    fn required_rejects_blank() {
        assert!(validate_required("ana", "name").is_ok());
        let error = validate_required("   ", "name").unwrap_err();
        assert_eq!(error.code(), "CAMPO_OBRIGATORIO");
        assert_eq!(error.message(), "Field name is required");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(validate_length("abc", "name", 3, 5).is_ok());
        assert!(validate_length("abcde", "name", 3, 5).is_ok());
        assert_eq!(validate_length("ab", "name", 3, 5).unwrap_err().code(), "CAMPO_MUITO_CURTO");
        assert_eq!(validate_length("abcdef", "name", 3, 5).unwrap_err().code(), "CAMPO_MUITO_LONGO");
        assert!(validate_length(&"x".repeat(500), "bio", 1, 0).is_ok());
    }

    #[test]
    fn numeric_checks() {
        assert!(validate_positive(0.5, "price").is_ok());
        assert_eq!(
            validate_positive(0.0, "price").unwrap_err().code(),
            "NUMERO_DEVE_SER_POSITIVO"
        );

        assert!(validate_range(5.0, 1.0, 10.0, "qty").is_ok());
        assert_eq!(validate_range(0.0, 1.0, 10.0, "qty").unwrap_err().code(), "NUMERO_ABAIXO_MINIMO");
        assert_eq!(validate_range(11.0, 1.0, 10.0, "qty").unwrap_err().code(), "NUMERO_ACIMA_MAXIMO");
    }
}

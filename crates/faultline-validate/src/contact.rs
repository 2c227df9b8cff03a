use std::sync::OnceLock;

use email_address::EmailAddress;
use faultline_core::ClassifiedError;
use regex::Regex;

use crate::document::digits;

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // (11) 99999-9999, 11 99999-9999, 11999999999, 9999-9999
    RE.get_or_init(|| Regex::new(r"^(\([0-9]{2}\)[ \t\n\f\r]?|[0-9]{2}[ \t\n\f\r]?)?9?[0-9]{4}-?[0-9]{4}$").expect("must be valid regex"))
}

fn cep_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{5}-?[0-9]{3}$").expect("must be valid regex"))
}

pub(crate) fn check_email(email: &str, max_length: usize) -> Result<(), ClassifiedError> {
    if email.is_empty() {
        return Err(ClassifiedError::validation("EMAIL_VAZIO", "Email must not be empty"));
    }

    if email.len() > max_length {
        return Err(
            ClassifiedError::validation("EMAIL_MUITO_LONGO", format!("Email too long (maximum {max_length} characters)"))
                .with_detail(format!("Length: {}", email.len())),
        );
    }

    email.parse::<EmailAddress>().map(drop).map_err(|e| {
        ClassifiedError::validation("EMAIL_FORMATO_INVALIDO", "Invalid email format")
            .with_detail(format!("Provided email: {email}"))
            .with_cause(e)
    })
}

pub(crate) fn check_phone(phone: &str, min_digits: usize, max_digits: usize) -> Result<(), ClassifiedError> {
    if phone.is_empty() {
        return Err(ClassifiedError::validation("TELEFONE_VAZIO", "Phone number must not be empty"));
    }

    if !phone_pattern().is_match(phone) {
        return Err(
            ClassifiedError::validation("TELEFONE_FORMATO_INVALIDO", "Invalid phone number format").with_detail(format!(
                "Provided phone: {phone} - expected format: (11) 99999-9999 or 11999999999"
            )),
        );
    }

    let count = digits(phone).len();
    if !(min_digits..=max_digits).contains(&count) {
        return Err(ClassifiedError::validation(
            "TELEFONE_TAMANHO_INVALIDO",
            format!("Phone number must have between {min_digits} and {max_digits} digits"),
        )
        .with_detail(format!("Provided phone: {phone}")));
    }

    Ok(())
}

/// Validate an email address with the default 254-byte limit
///
/// # Errors
///
/// Returns a `Validation` error with code `EMAIL_VAZIO`, `EMAIL_MUITO_LONGO`
/// or `EMAIL_FORMATO_INVALIDO`; the latter carries the parser error as cause
pub fn validate_email(email: &str) -> Result<(), ClassifiedError> {
    check_email(email, faultline_config::MAX_EMAIL_LENGTH)
}

/// Validate a Brazilian phone number with 10 or 11 digits
///
/// # Errors
///
/// Returns a `Validation` error with code `TELEFONE_VAZIO`,
/// `TELEFONE_FORMATO_INVALIDO` or `TELEFONE_TAMANHO_INVALIDO`
pub fn validate_phone(phone: &str) -> Result<(), ClassifiedError> {
    check_phone(phone, 10, 11)
}

/// Validate a CEP postal code, `12345-678` or `12345678`
///
/// # Errors
///
/// Returns a `Validation` error with code `CEP_VAZIO` or `CEP_FORMATO_INVALIDO`
pub fn validate_cep(cep: &str) -> Result<(), ClassifiedError> {
    if cep.is_empty() {
        return Err(ClassifiedError::validation("CEP_VAZIO", "CEP must not be empty"));
    }

    if !cep_pattern().is_match(cep) {
        return Err(ClassifiedError::validation("CEP_FORMATO_INVALIDO", "Invalid CEP format")
            .with_detail(format!("Provided CEP: {cep} - expected format: 12345-678 or 12345678")));
    }

    Ok(())
}

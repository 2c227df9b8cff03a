//! Field validators for Brazilian API payloads
//!
//! Every validator returns `Ok(())` or a `Validation` [`ClassifiedError`]
//! with a stable code. Free functions apply the default policy;
//! [`Validator`] applies a loaded [`ValidationConfig`].

mod contact;
mod document;
mod field;
mod password;

use faultline_config::ValidationConfig;
use faultline_core::ClassifiedError;

pub use contact::{validate_cep, validate_email, validate_phone};
pub use document::{validate_cnpj, validate_cpf};
pub use field::{validate_id, validate_length, validate_positive, validate_range, validate_required, validate_uuid};
pub use password::validate_password;

/// Validators bound to a configured policy
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Policy in effect
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// # Errors
    ///
    /// See [`validate_email`]; the length limit comes from the config
    pub fn email(&self, email: &str) -> Result<(), ClassifiedError> {
        contact::check_email(email, self.config.email_max_length)
    }

    /// # Errors
    ///
    /// See [`validate_phone`]; the digit bounds come from the config
    pub fn phone(&self, phone: &str) -> Result<(), ClassifiedError> {
        contact::check_phone(phone, self.config.phone_min_digits, self.config.phone_max_digits)
    }

    /// # Errors
    ///
    /// See [`validate_password`]; the minimum length comes from the config
    pub fn password(&self, password: &str) -> Result<(), ClassifiedError> {
        validate_password(password, self.config.password_min_length())
    }

    /// # Errors
    ///
    /// See [`validate_cpf`]
    #[allow(clippy::unused_self)]
    pub fn cpf(&self, cpf: &str) -> Result<(), ClassifiedError> {
        validate_cpf(cpf)
    }

    /// # Errors
    ///
    /// See [`validate_cnpj`]
    #[allow(clippy::unused_self)]
    pub fn cnpj(&self, cnpj: &str) -> Result<(), ClassifiedError> {
        validate_cnpj(cnpj)
    }

    /// # Errors
    ///
    /// See [`validate_cep`]
    #[allow(clippy::unused_self)]
    pub fn cep(&self, cep: &str) -> Result<(), ClassifiedError> {
        validate_cep(cep)
    }

    /// # Errors
    ///
    /// See [`validate_uuid`]
    #[allow(clippy::unused_self)]
    pub fn uuid(&self, uuid: &str) -> Result<(), ClassifiedError> {
        validate_uuid(uuid)
    }
}

#[cfg(test)]
mod tests {
    use faultline_core::Category;

    use super::*;

    #[test]
    fn default_validator_matches_free_functions() {
        let validator = Validator::default();
        assert!(validator.email("user@example.com").is_ok());
        assert!(validator.password("Abcdefg1!").is_ok());
        assert!(validator.phone("(11) 99999-9999").is_ok());
        assert!(validator.cpf("529.982.247-25").is_ok());
        assert!(validator.cnpj("11.222.333/0001-81").is_ok());
        assert!(validator.cep("01310-100").is_ok());
        assert!(validator.uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
    }

    #[test]
    fn configured_limits_apply() {
        let validator = Validator::new(ValidationConfig {
            password_min_length: 12,
            email_max_length: 16,
            phone_min_digits: 11,
            phone_max_digits: 11,
        });

        assert_eq!(validator.password("Abcdefg1!").unwrap_err().code(), "SENHA_MUITO_CURTA");
        assert_eq!(
            validator.email("someone@example.com").unwrap_err().code(),
            "EMAIL_MUITO_LONGO"
        );
        assert_eq!(
            validator.phone("(11) 3333-4444").unwrap_err().code(),
            "TELEFONE_TAMANHO_INVALIDO"
        );
    }

    #[test]
    fn every_failure_is_a_bad_request() {
        let failures = [
            validate_email("").unwrap_err(),
            validate_password("x", 0).unwrap_err(),
            validate_cpf("123").unwrap_err(),
            validate_uuid("nope").unwrap_err(),
        ];

        for failure in failures {
            assert_eq!(failure.category(), Category::Validation);
            assert_eq!(failure.http_status(), 400);
        }
    }
}

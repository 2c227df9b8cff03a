//! Brazilian taxpayer document checksums (CPF and CNPJ)

use faultline_core::ClassifiedError;

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// ASCII digits of `input`, formatting characters dropped
pub(crate) fn digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Weighted sum mod 11; remainders below 2 map to 0
fn check_digit(digits: &[u32], weights: impl IntoIterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(digit, weight)| digit * weight).sum();
    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

/// Validate a CPF, with or without punctuation
///
/// # Errors
///
/// Returns a `Validation` error with code `CPF_VAZIO`, `CPF_TAMANHO_INVALIDO`,
/// `CPF_DIGITOS_IGUAIS` or `CPF_INVALIDO`
pub fn validate_cpf(cpf: &str) -> Result<(), ClassifiedError> {
    if cpf.is_empty() {
        return Err(ClassifiedError::validation("CPF_VAZIO", "CPF must not be empty"));
    }

    let digits = digits(cpf);
    let provided = || format!("Provided CPF: {cpf}");

    if digits.len() != CPF_LENGTH {
        return Err(ClassifiedError::validation("CPF_TAMANHO_INVALIDO", "CPF must have 11 digits").with_detail(provided()));
    }

    if all_equal(&digits) {
        return Err(
            ClassifiedError::validation("CPF_DIGITOS_IGUAIS", "CPF digits must not all be equal").with_detail(provided()),
        );
    }

    let first = check_digit(&digits[..9], (2..=10).rev());
    let second = check_digit(&digits[..10], (2..=11).rev());

    if digits[9] != first || digits[10] != second {
        return Err(
            ClassifiedError::validation("CPF_INVALIDO", "Invalid CPF: check digits do not match").with_detail(provided()),
        );
    }

    Ok(())
}

/// Validate a CNPJ, with or without punctuation
///
/// # Errors
///
/// Returns a `Validation` error with code `CNPJ_VAZIO`, `CNPJ_TAMANHO_INVALIDO`,
/// `CNPJ_DIGITOS_IGUAIS` or `CNPJ_INVALIDO`
pub fn validate_cnpj(cnpj: &str) -> Result<(), ClassifiedError> {
    if cnpj.is_empty() {
        return Err(ClassifiedError::validation("CNPJ_VAZIO", "CNPJ must not be empty"));
    }

    let digits = digits(cnpj);
    let provided = || format!("Provided CNPJ: {cnpj}");

    if digits.len() != CNPJ_LENGTH {
        return Err(
            ClassifiedError::validation("CNPJ_TAMANHO_INVALIDO", "CNPJ must have 14 digits").with_detail(provided()),
        );
    }

    if all_equal(&digits) {
        return Err(
            ClassifiedError::validation("CNPJ_DIGITOS_IGUAIS", "CNPJ digits must not all be equal").with_detail(provided()),
        );
    }

    let first = check_digit(&digits[..12], CNPJ_FIRST_WEIGHTS);
    let second = check_digit(&digits[..13], CNPJ_SECOND_WEIGHTS);

    if digits[12] != first || digits[13] != second {
        return Err(
            ClassifiedError::validation("CNPJ_INVALIDO", "Invalid CNPJ: check digits do not match").with_detail(provided()),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cpf_with_and_without_punctuation() {
        assert!(validate_cpf("529.982.247-25").is_ok());
        assert!(validate_cpf("52998224725").is_ok());
    }

    #[test]
    fn empty_cpf() {
        assert_eq!(validate_cpf("").unwrap_err().code(), "CPF_VAZIO");
    }

    #[test]
    fn repeated_cpf_digits() {
        let error = validate_cpf("111.111.111-11").unwrap_err();
        assert_eq!(error.code(), "CPF_DIGITOS_IGUAIS");
        assert_eq!(error.detail(), Some("Provided CPF: 111.111.111-11"));
    }

    #[test]
    fn wrong_cpf_checksum() {
        let error = validate_cpf("529.982.247-26").unwrap_err();
        assert_eq!(error.code(), "CPF_INVALIDO");
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn short_cpf() {
        assert_eq!(validate_cpf("529.982.247").unwrap_err().code(), "CPF_TAMANHO_INVALIDO");
        assert_eq!(validate_cpf("abc").unwrap_err().code(), "CPF_TAMANHO_INVALIDO");
    }

    #[test]
    fn cpf_with_zero_check_digit() {
        // 1 * 10 + 1 * 2 = 12, remainder 1
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1], (2..=10).rev()), 0);
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 0], (2..=10).rev()), 1);
    }

    #[test]
    fn valid_cnpj() {
        assert!(validate_cnpj("11.222.333/0001-81").is_ok());
        assert!(validate_cnpj("11222333000181").is_ok());
    }

    #[test]
    fn cnpj_failures() {
        assert_eq!(validate_cnpj("").unwrap_err().code(), "CNPJ_VAZIO");
        assert_eq!(validate_cnpj("11.222.333/0001").unwrap_err().code(), "CNPJ_TAMANHO_INVALIDO");
        assert_eq!(validate_cnpj("00.000.000/0000-00").unwrap_err().code(), "CNPJ_DIGITOS_IGUAIS");
        assert_eq!(validate_cnpj("11.222.333/0001-82").unwrap_err().code(), "CNPJ_INVALIDO");
    }
}

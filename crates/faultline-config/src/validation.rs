use serde::Deserialize;

/// Policy applied by the field validators
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Minimum password length in characters, 0 means the default of 8
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    /// Maximum email length in bytes
    #[serde(default = "default_email_max_length")]
    pub email_max_length: usize,
    /// Minimum digit count of a phone number
    #[serde(default = "default_phone_min_digits")]
    pub phone_min_digits: usize,
    /// Maximum digit count of a phone number
    #[serde(default = "default_phone_max_digits")]
    pub phone_max_digits: usize,
}

impl ValidationConfig {
    /// Effective minimum password length
    pub const fn password_min_length(&self) -> usize {
        if self.password_min_length == 0 {
            DEFAULT_PASSWORD_MIN_LENGTH
        } else {
            self.password_min_length
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            email_max_length: MAX_EMAIL_LENGTH,
            phone_min_digits: default_phone_min_digits(),
            phone_max_digits: default_phone_max_digits(),
        }
    }
}

/// Password length used when none is configured
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Upper bound for email length (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

const fn default_password_min_length() -> usize {
    DEFAULT_PASSWORD_MIN_LENGTH
}

const fn default_email_max_length() -> usize {
    MAX_EMAIL_LENGTH
}

const fn default_phone_min_digits() -> usize {
    10
}

const fn default_phone_max_digits() -> usize {
    11
}

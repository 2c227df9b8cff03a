use std::path::Path;

use crate::{Config, MAX_EMAIL_LENGTH};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder expansion
    /// fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw)?;
        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_validation_config()?;
        self.validate_reporting_config()?;
        Ok(())
    }

    fn validate_validation_config(&self) -> anyhow::Result<()> {
        let validation = &self.validation;

        if validation.email_max_length == 0 || validation.email_max_length > MAX_EMAIL_LENGTH {
            anyhow::bail!("validation.email_max_length must be between 1 and {MAX_EMAIL_LENGTH}");
        }

        if validation.phone_min_digits > validation.phone_max_digits {
            anyhow::bail!("validation.phone_min_digits must not exceed validation.phone_max_digits");
        }

        Ok(())
    }

    fn validate_reporting_config(&self) -> anyhow::Result<()> {
        if self.reporting.panic_code.trim().is_empty() {
            anyhow::bail!("reporting.panic_code must not be empty");
        }

        Ok(())
    }
}

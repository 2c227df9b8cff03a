#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod reporting;
pub mod validation;

use serde::Deserialize;

pub use reporting::*;
pub use validation::*;

/// Top-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Field validator policy
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Error reporting at the HTTP boundary
    #[serde(default)]
    pub reporting: ReportingConfig,
}

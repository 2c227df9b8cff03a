use serde::Deserialize;

/// How classified errors are reported at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportingConfig {
    /// Log 4xx failures at `warn` instead of `debug`
    #[serde(default)]
    pub log_client_errors: bool,
    /// Strip `detail` from 5xx response bodies
    #[serde(default)]
    pub redact_server_detail: bool,
    /// Code reported when a handler panics
    #[serde(default = "default_panic_code")]
    pub panic_code: String,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            log_client_errors: false,
            redact_server_detail: false,
            panic_code: default_panic_code(),
        }
    }
}

fn default_panic_code() -> String {
    "PANIC_ERROR".to_string()
}

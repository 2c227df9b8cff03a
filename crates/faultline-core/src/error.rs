use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use http::StatusCode;
use thiserror::Error;

use crate::Category;

/// Shared handle to the underlying error a classification wraps
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// What the HTTP boundary needs to render and log a failure
///
/// `faultline-http` renders any implementor, so this crate stays free of a
/// web framework dependency.
pub trait HttpError: StdError {
    /// Response status
    fn status_code(&self) -> StatusCode;

    /// Category string used in logs (e.g. `NOT_FOUND`)
    fn error_type(&self) -> &str;

    /// Stable code clients match on
    fn error_code(&self) -> &str;

    /// Serialized response body
    fn wire_body(&self) -> Vec<u8>;
}

/// Structured error value reported at the HTTP boundary
///
/// `category` and `code` are fixed at construction. `detail` and `cause`
/// can be attached through [`with_detail`](Self::with_detail) and
/// [`with_cause`](Self::with_cause), which consume the value and return the
/// enriched one. The HTTP status is always derived from the category.
#[derive(Debug, Clone, Error)]
#[error("[{category}] {code}: {message}{}", detail_suffix(.detail))]
pub struct ClassifiedError {
    category: Category,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    detail: Option<Cow<'static, str>>,
    #[source]
    cause: Option<Cause>,
}

#[allow(clippy::ref_option)]
fn detail_suffix(detail: &Option<Cow<'static, str>>) -> String {
    match detail.as_deref() {
        Some(detail) if !detail.is_empty() => format!(" - {detail}"),
        _ => String::new(),
    }
}

impl ClassifiedError {
    /// Create an error of any category
    pub fn new(
        category: Category,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            category,
            code: code.into(),
            message: message.into(),
            detail: None,
            cause: None,
        }
    }

    /// Create a compile-time template, used for predefined errors
    #[must_use]
    pub const fn template(category: Category, code: &'static str, message: &'static str) -> Self {
        Self {
            category,
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
            detail: None,
            cause: None,
        }
    }

    /// Client input failed validation (400)
    pub fn validation(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::Validation, code, message)
    }

    /// Database operation failed (500)
    pub fn database(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::Database, code, message)
    }

    /// Upstream connection failed (503)
    pub fn connection(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::Connection, code, message)
    }

    /// Resource does not exist (404), message is `"<resource> not found"`
    pub fn not_found(code: impl Into<Cow<'static, str>>, resource: impl fmt::Display) -> Self {
        Self::new(Category::NotFound, code, format!("{resource} not found"))
    }

    /// Missing or invalid credentials (401)
    pub fn authentication(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::Authentication, code, message)
    }

    /// Caller lacks permission (403)
    pub fn authorization(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::Authorization, code, message)
    }

    /// Request conflicts with existing state (409)
    pub fn conflict(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::Conflict, code, message)
    }

    /// Unexpected server-side failure (500)
    pub fn internal(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::Internal, code, message)
    }

    /// Usage limit exceeded (429)
    pub fn rate_limit(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::RateLimit, code, message)
    }

    /// HTTP method rejected (405), message names the expected method
    pub fn method_not_allowed(code: impl Into<Cow<'static, str>>, expected: impl fmt::Display) -> Self {
        Self::new(
            Category::MethodNotAllowed,
            code,
            format!("Method not allowed; expected: {expected}"),
        )
    }

    /// Unusable file (400)
    pub fn file(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Category::FileError, code, message)
    }

    /// Replace the detail unconditionally
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the underlying error
    ///
    /// When the detail is unset or empty, the cause's message becomes the
    /// detail. A non-empty explicit detail is never overwritten.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Attach an already shared or type-erased cause
    #[must_use]
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        if self.detail.as_deref().is_none_or(str::is_empty) {
            self.detail = Some(Cow::Owned(cause.to_string()));
        }
        self.cause = Some(cause);
        self
    }

    /// Copy of this error without detail or cause
    ///
    /// Used by the reporting boundary when server-side detail must not
    /// reach the client.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            category: self.category,
            code: self.code.clone(),
            message: self.message.clone(),
            detail: None,
            cause: None,
        }
    }

    /// Classification category
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Stable application-defined code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Supplementary context, if any
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The wrapped underlying error, if any
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// HTTP status derived from the category
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.category.status_code()
    }

    /// Numeric HTTP status derived from the category
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.category.status_code().as_u16()
    }

    /// Whether this error belongs to `category`
    #[must_use]
    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }
}

impl HttpError for ClassifiedError {
    fn status_code(&self) -> StatusCode {
        self.category.status_code()
    }

    fn error_type(&self) -> &str {
        self.category.as_str()
    }

    fn error_code(&self) -> &str {
        &self.code
    }

    fn wire_body(&self) -> Vec<u8> {
        self.to_wire_form()
    }
}

//! Pass-through wrappers for operations that may or may not have failed

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::{Category, ClassifiedError, classify};

const DATABASE_MESSAGE: &str = "Database operation failed";
const CONNECTION_MESSAGE: &str = "Connection failed";
const INTERNAL_MESSAGE: &str = "Internal server error";
const FORMAT_MESSAGE: &str = "Invalid data format";

fn wrap<E>(category: Category, message: &'static str, code: Cow<'static, str>, error: E) -> ClassifiedError
where
    E: StdError + Send + Sync + 'static,
{
    ClassifiedError::new(category, code, message).with_cause(error)
}

/// Wrap a database failure, passing absence through
pub fn wrap_database_error<E>(code: impl Into<Cow<'static, str>>, error: Option<E>) -> Option<ClassifiedError>
where
    E: StdError + Send + Sync + 'static,
{
    error.map(|e| wrap(Category::Database, DATABASE_MESSAGE, code.into(), e))
}

/// Wrap a connection failure, passing absence through
pub fn wrap_connection_error<E>(code: impl Into<Cow<'static, str>>, error: Option<E>) -> Option<ClassifiedError>
where
    E: StdError + Send + Sync + 'static,
{
    error.map(|e| wrap(Category::Connection, CONNECTION_MESSAGE, code.into(), e))
}

/// Wrap an internal failure, passing absence through
pub fn wrap_internal_error<E>(code: impl Into<Cow<'static, str>>, error: Option<E>) -> Option<ClassifiedError>
where
    E: StdError + Send + Sync + 'static,
{
    error.map(|e| wrap(Category::Internal, INTERNAL_MESSAGE, code.into(), e))
}

/// Wrap a malformed-input failure as a validation error, passing absence through
pub fn wrap_format_error<E>(code: impl Into<Cow<'static, str>>, error: Option<E>) -> Option<ClassifiedError>
where
    E: StdError + Send + Sync + 'static,
{
    error.map(|e| wrap(Category::Validation, FORMAT_MESSAGE, code.into(), e))
}

/// Classification adapters for fallible calls
///
/// ```
/// use faultline_core::ResultExt;
///
/// fn read_config() -> Result<String, faultline_core::ClassifiedError> {
///     std::fs::read_to_string("/nonexistent/app.toml").internal_err("CONFIG_READ")
/// }
///
/// let error = read_config().unwrap_err();
/// assert_eq!(error.code(), "CONFIG_READ");
/// assert_eq!(error.http_status(), 500);
/// ```
pub trait ResultExt<T> {
    /// Map the error into a `Database` classification
    ///
    /// # Errors
    ///
    /// Returns the classified error when `self` is `Err`
    fn database_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError>;

    /// Map the error into a `Connection` classification
    ///
    /// # Errors
    ///
    /// Returns the classified error when `self` is `Err`
    fn connection_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError>;

    /// Map the error into an `Internal` classification
    ///
    /// # Errors
    ///
    /// Returns the classified error when `self` is `Err`
    fn internal_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError>;

    /// Map the error into a `Validation` classification for malformed data
    ///
    /// # Errors
    ///
    /// Returns the classified error when `self` is `Err`
    fn format_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError>;

    /// Route the error through [`classify`]
    ///
    /// # Errors
    ///
    /// Returns the classified error when `self` is `Err`
    fn classified(self) -> Result<T, ClassifiedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn database_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError> {
        self.map_err(|e| wrap(Category::Database, DATABASE_MESSAGE, code.into(), e))
    }

    fn connection_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError> {
        self.map_err(|e| wrap(Category::Connection, CONNECTION_MESSAGE, code.into(), e))
    }

    fn internal_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError> {
        self.map_err(|e| wrap(Category::Internal, INTERNAL_MESSAGE, code.into(), e))
    }

    fn format_err(self, code: impl Into<Cow<'static, str>>) -> Result<T, ClassifiedError> {
        self.map_err(|e| wrap(Category::Validation, FORMAT_MESSAGE, code.into(), e))
    }

    fn classified(self) -> Result<T, ClassifiedError> {
        self.map_err(classify)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn absent_error_passes_through() {
        assert!(wrap_database_error("DB", None::<io::Error>).is_none());
        assert!(wrap_connection_error("CONN", None::<io::Error>).is_none());
        assert!(wrap_internal_error("INT", None::<io::Error>).is_none());
        assert!(wrap_format_error("FMT", None::<io::Error>).is_none());
    }

    #[test]
    fn database_wrap_carries_cause_and_detail() {
        let error = wrap_database_error("DB_QUERY", Some(io::Error::other("relation does not exist"))).unwrap();

        assert_eq!(error.category(), Category::Database);
        assert_eq!(error.code(), "DB_QUERY");
        assert_eq!(error.message(), DATABASE_MESSAGE);
        assert_eq!(error.detail(), Some("relation does not exist"));
        assert!(error.cause().is_some_and(|cause| cause.is::<io::Error>()));
    }

    #[test]
    fn wrappers_fix_their_category() {
        let cause = || Some(io::Error::other("x"));
        assert_eq!(wrap_connection_error("C", cause()).unwrap().http_status(), 503);
        assert_eq!(wrap_internal_error("C", cause()).unwrap().http_status(), 500);

        let format = wrap_format_error("JSON_INVALIDO", cause()).unwrap();
        assert_eq!(format.category(), Category::Validation);
        assert_eq!(format.http_status(), 400);
    }

    #[test]
    fn result_adapters_map_only_errors() {
        let ok: Result<u8, io::Error> = Ok(7);
        assert_eq!(ok.database_err("DB").unwrap(), 7);

        let err: Result<u8, io::Error> = Err(io::Error::other("timeout"));
        let classified = err.connection_err("UPSTREAM_TIMEOUT").unwrap_err();
        assert_eq!(classified.category(), Category::Connection);
        assert_eq!(classified.detail(), Some("timeout"));
    }

    #[test]
    fn classified_adapter_keeps_existing_classification() {
        let err: Result<(), ClassifiedError> = Err(ClassifiedError::not_found("USER_NOT_FOUND", "User"));
        assert_eq!(err.classified().unwrap_err().category(), Category::NotFound);

        let raw: Result<(), io::Error> = Err(io::Error::other("boom"));
        assert_eq!(raw.classified().unwrap_err().category(), Category::Internal);
    }
}

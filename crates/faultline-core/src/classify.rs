//! Narrowing and conversion of arbitrary errors
//!
//! Narrowing only recognizes a [`ClassifiedError`] itself, not one buried
//! in another error's source chain. Absence is expressed with `Option` at
//! the call site, e.g. `maybe_err.is_some_and(|e| is_validation_error(e))`.

use std::error::Error as StdError;
use std::sync::Arc;

use http::StatusCode;

use crate::{Category, ClassifiedError};

/// Code assigned to errors that reached [`classify`] unclassified
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Code reported by [`code_of`] for unclassified errors
pub const UNKNOWN_CODE: &str = "UNKNOWN_CODE";

/// Convert any error into a [`ClassifiedError`]
///
/// An already classified error is returned untouched. Anything else becomes
/// an `Internal` error with code [`UNKNOWN_ERROR_CODE`] that wraps the
/// original as its cause.
pub fn classify<E>(error: E) -> ClassifiedError
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    match error.into().downcast::<ClassifiedError>() {
        Ok(classified) => *classified,
        Err(other) => ClassifiedError::internal(UNKNOWN_ERROR_CODE, "Unclassified internal error")
            .with_shared_cause(Arc::from(other)),
    }
}

/// Narrow a generic error to a [`ClassifiedError`]
#[must_use]
pub fn narrow<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ClassifiedError> {
    error.downcast_ref::<ClassifiedError>()
}

/// Category of a classified error, absent for anything else
#[must_use]
pub fn category_of(error: &(dyn StdError + 'static)) -> Option<Category> {
    narrow(error).map(ClassifiedError::category)
}

/// Code of a classified error, [`UNKNOWN_CODE`] otherwise
#[must_use]
pub fn code_of<'a>(error: &'a (dyn StdError + 'static)) -> &'a str {
    narrow(error).map_or(UNKNOWN_CODE, ClassifiedError::code)
}

/// HTTP status of a classified error, 500 otherwise
#[must_use]
pub fn status_of(error: &(dyn StdError + 'static)) -> StatusCode {
    narrow(error).map_or(StatusCode::INTERNAL_SERVER_ERROR, ClassifiedError::status_code)
}

/// Whether `error` is a [`ClassifiedError`] of `category`
#[must_use]
pub fn is_category(error: &(dyn StdError + 'static), category: Category) -> bool {
    category_of(error) == Some(category)
}

#[must_use]
pub fn is_validation_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::Validation)
}

#[must_use]
pub fn is_database_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::Database)
}

#[must_use]
pub fn is_connection_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::Connection)
}

#[must_use]
pub fn is_not_found_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::NotFound)
}

#[must_use]
pub fn is_authentication_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::Authentication)
}

#[must_use]
pub fn is_authorization_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::Authorization)
}

#[must_use]
pub fn is_conflict_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::Conflict)
}

#[must_use]
pub fn is_internal_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::Internal)
}

#[must_use]
pub fn is_rate_limit_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::RateLimit)
}

#[must_use]
pub fn is_method_not_allowed_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::MethodNotAllowed)
}

#[must_use]
pub fn is_file_error(error: &(dyn StdError + 'static)) -> bool {
    is_category(error, Category::FileError)
}

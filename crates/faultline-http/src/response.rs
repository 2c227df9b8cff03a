use std::error::Error as StdError;

use axum::response::{IntoResponse, Response};
use faultline_core::{ClassifiedError, HttpError, catalog, classify};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Uri};

/// Handler error type rendering the wire form of a [`ClassifiedError`]
///
/// Any `std::error::Error` converts through [`classify`], so `?` works on
/// arbitrary errors and an already classified error passes unchanged.
#[derive(Debug, Clone)]
pub struct ErrorResponse(ClassifiedError);

impl ErrorResponse {
    /// The classification to be rendered
    pub const fn error(&self) -> &ClassifiedError {
        &self.0
    }

    pub fn into_inner(self) -> ClassifiedError {
        self.0
    }
}

impl<E> From<E> for ErrorResponse
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self(classify(error))
    }
}

/// Render any [`HttpError`] as a JSON response
pub fn render<E: HttpError + ?Sized>(error: &E) -> Response {
    (
        error.status_code(),
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        error.wire_body(),
    )
        .into_response()
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let mut response = render(&self.0);

        // Picked up by the reporting middleware
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Router fallback for unknown paths
#[allow(clippy::unused_async)]
pub async fn fallback(uri: Uri) -> ErrorResponse {
    catalog::ENDPOINT_NOT_FOUND.with_detail(uri.path().to_owned()).into()
}

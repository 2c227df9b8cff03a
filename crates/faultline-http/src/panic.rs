use std::any::Any;
use std::sync::Arc;

use axum::body::Body;
use axum::response::IntoResponse;
use faultline_core::ClassifiedError;
use http::Response;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::ErrorResponse;

/// Renders a captured panic as an `Internal` error
///
/// The panic payload is logged but never sent to the client.
#[derive(Debug, Clone)]
pub struct PanicResponder {
    code: Arc<str>,
}

impl PanicResponder {
    pub fn new(code: impl Into<Arc<str>>) -> Self {
        Self { code: code.into() }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, panic: Box<dyn Any + Send + 'static>) -> Response<Self::ResponseBody> {
        let payload = panic
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| panic.downcast_ref::<&str>().copied())
            .unwrap_or("non-string panic payload");

        tracing::error!(code = %self.code, panic = payload, "handler panicked");

        let error = ClassifiedError::internal(self.code.to_string(), "Unexpected internal error");
        ErrorResponse::from(error).into_response()
    }
}

/// Layer converting handler panics into classified 500 responses
pub fn panic_layer(code: impl Into<Arc<str>>) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder::new(code))
}

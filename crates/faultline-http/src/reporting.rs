use std::error::Error as StdError;
use std::fmt::Write;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use faultline_config::ReportingConfig;
use faultline_core::{ClassifiedError, HttpError};

use crate::ErrorResponse;

/// Log every classified failure once, at the boundary
///
/// Only responses rendered from an [`ErrorResponse`] are seen here. Server
/// errors log at `error`; client errors at `warn` when
/// `log_client_errors` is set and at `debug` otherwise. With
/// `redact_server_detail`, 5xx bodies are re-rendered without detail.
pub async fn reporting_middleware(config: ReportingConfig, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let Some(error) = response.extensions().get::<ClassifiedError>() else {
        return response;
    };

    let status = response.status();
    let chain = cause_chain(error);

    macro_rules! report {
        ($level:ident) => {
            tracing::$level!(
                %method,
                path = %path,
                category = error.error_type(),
                code = error.error_code(),
                status = status.as_u16(),
                detail = error.detail().unwrap_or_default(),
                error = %chain,
                "{}",
                error.message()
            )
        };
    }

    if status.is_server_error() {
        report!(error);
    } else if config.log_client_errors {
        report!(warn);
    } else {
        report!(debug);
    }

    if config.redact_server_detail && status.is_server_error() && error.detail().is_some() {
        return ErrorResponse::from(error.redacted()).into_response();
    }

    response
}

/// Cause messages joined outermost first
fn cause_chain(error: &ClassifiedError) -> String {
    let mut chain = String::new();
    let mut source = error.source();
    while let Some(cause) = source {
        if !chain.is_empty() {
            chain.push_str(": ");
        }
        let _ = write!(chain, "{cause}");
        source = cause.source();
    }
    chain
}

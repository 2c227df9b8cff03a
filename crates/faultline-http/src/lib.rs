//! axum boundary for classified errors
//!
//! Handlers return [`ErrorResponse`] (any error converts through `?`), the
//! [`JsonBody`] extractor classifies malformed payloads, and
//! [`reporting_layers`] adds panic capture plus one structured log line per
//! failed request.

#![allow(clippy::must_use_candidate)]

mod extract;
mod method;
mod panic;
mod reporting;
mod response;

use axum::Router;
use faultline_config::ReportingConfig;

pub use extract::JsonBody;
pub use method::require_method;
pub use panic::{PanicResponder, panic_layer};
pub use reporting::reporting_middleware;
pub use response::{ErrorResponse, fallback, render};

/// Apply panic capture and the reporting middleware to `router`
///
/// Panic capture is the outermost layer so a panicking handler still
/// yields a classified body.
pub fn reporting_layers<S>(router: Router<S>, config: &ReportingConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let reporting = config.clone();
    router
        .layer(axum::middleware::from_fn(move |req, next| {
            let config = reporting.clone();
            async move { reporting::reporting_middleware(config, req, next).await }
        }))
        .layer(panic_layer(config.panic_code.clone()))
}

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use faultline_core::ClassifiedError;
use http::header::ALLOW;
use http::{HeaderValue, Method};

use crate::ErrorResponse;

/// Reject requests whose method is not `expected`
///
/// Applied with `.layer` to a handler registered with `any`, so the client
/// gets a classified 405 body instead of an empty one.
pub async fn require_method(expected: Method, request: Request, next: Next) -> Response {
    if request.method() == expected {
        return next.run(request).await;
    }

    let error = ClassifiedError::method_not_allowed("METHOD_NOT_ALLOWED", &expected)
        .with_detail(format!("Method used: {}, expected: {expected}", request.method()));

    let mut response = ErrorResponse::from(error).into_response();
    if let Ok(allow) = HeaderValue::from_str(expected.as_str()) {
        response.headers_mut().insert(ALLOW, allow);
    }
    response
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::routing::any;
    use http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn router() -> Router {
        Router::new().route(
            "/users",
            any(|| async { "created" }).layer(axum::middleware::from_fn(|req, next| {
                require_method(Method::POST, req, next)
            })),
        )
    }

    #[tokio::test]
    async fn expected_method_passes() {
        let response = router()
            .oneshot(http::Request::post("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn other_methods_get_classified_405() {
        let response = router()
            .oneshot(http::Request::get("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "POST");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["category"], "METHOD_NOT_ALLOWED");
        assert_eq!(body["message"], "Method not allowed; expected: POST");
        assert_eq!(body["detail"], "Method used: GET, expected: POST");
    }
}

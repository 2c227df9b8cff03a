use axum::Json;
use axum::extract::{FromRequest, Request};
use faultline_core::ClassifiedError;
use serde::de::DeserializeOwned;

use crate::ErrorResponse;

/// JSON extractor whose rejection is a `Validation` error (`JSON_INVALIDO`)
///
/// The axum rejection is kept as the cause, so its text becomes the detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ClassifiedError::validation("JSON_INVALIDO", "Invalid JSON")
                .with_cause(rejection)
                .into()),
        }
    }
}

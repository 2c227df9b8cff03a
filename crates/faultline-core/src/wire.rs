use serde::{Serialize, Serializer};

use crate::{Category, ClassifiedError};

/// JSON body sent to API clients
///
/// The cause is never serialized; it only leaves the process when a
/// call site copied it into `detail`.
#[derive(Serialize)]
struct WireError<'a> {
    error: bool,
    category: Category,
    code: &'a str,
    message: &'a str,
    http_status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl<'a> From<&'a ClassifiedError> for WireError<'a> {
    fn from(error: &'a ClassifiedError) -> Self {
        Self {
            error: true,
            category: error.category(),
            code: error.code(),
            message: error.message(),
            http_status: error.http_status(),
            detail: error.detail().filter(|detail| !detail.is_empty()),
        }
    }
}

impl Serialize for ClassifiedError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireError::from(self).serialize(serializer)
    }
}

impl ClassifiedError {
    /// Encode the wire form as JSON bytes
    ///
    /// Never fails the caller; an encoding failure is logged and yields an
    /// empty payload.
    #[must_use]
    pub fn to_wire_form(&self) -> Vec<u8> {
        serde_json::to_vec(&WireError::from(self)).unwrap_or_else(|e| {
            tracing::error!(error = %e, code = %self.code(), "failed to encode error wire form");
            Vec::new()
        })
    }
}

use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Closed classification tag for a failure
///
/// Each category is permanently bound to one HTTP status, see
/// [`Category::status_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Client input failed validation
    Validation,
    /// A database operation failed
    Database,
    /// An upstream connection failed or is unavailable
    Connection,
    /// The requested resource does not exist
    NotFound,
    /// Missing or invalid credentials
    Authentication,
    /// Authenticated caller lacks permission
    Authorization,
    /// The request conflicts with existing state
    Conflict,
    /// Unexpected server-side failure
    Internal,
    /// The caller exceeded a usage limit
    RateLimit,
    /// The HTTP method is not accepted by the endpoint
    MethodNotAllowed,
    /// An uploaded or referenced file is unusable
    FileError,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Self; 11] = [
        Self::Validation,
        Self::Database,
        Self::Connection,
        Self::NotFound,
        Self::Authentication,
        Self::Authorization,
        Self::Conflict,
        Self::Internal,
        Self::RateLimit,
        Self::MethodNotAllowed,
        Self::FileError,
    ];

    /// Canonical HTTP status for this category
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Validation | Self::FileError => StatusCode::BAD_REQUEST,
            Self::Database | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Connection => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Authorization => StatusCode::FORBIDDEN,
            Self::Conflict => StatusCode::CONFLICT,
            Self::RateLimit => StatusCode::TOO_MANY_REQUESTS,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Wire string, identical to the serde representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::Database => "DATABASE",
            Self::Connection => "CONNECTION",
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL",
            Self::RateLimit => "RATE_LIMIT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::FileError => "FILE_ERROR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

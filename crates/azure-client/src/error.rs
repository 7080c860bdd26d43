//! Azure client errors

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the Azure management API
#[derive(Debug, Error)]
pub enum AzureError {
    /// Azure returned a non-success status
    #[error("Azure API error ({status}): {code}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// ARM error code, e.g. `ResourceNotFound`
        code: String,
        /// Human readable message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// ARM error envelope: `{"error": {"code": "...", "message": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl AzureError {
    /// Build an error from a failed response
    ///
    /// Bodies that are not an ARM error envelope are kept verbatim as the
    /// message.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(rsp) => Self::Api {
                status,
                code: rsp.error.code,
                message: rsp.error.message,
            },
            Err(_) => Self::Api {
                status,
                code: String::new(),
                message: body.to_string(),
            },
        }
    }

    /// Whether the external resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

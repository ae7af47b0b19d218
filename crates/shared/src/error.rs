use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::ErrorBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    InvalidBase64,
}

/// Server-side failure; rendered to clients as an [`ErrorBody`].
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_request() -> Self {
        Self::new(ErrorCode::InvalidRequest, "Invalid request format")
    }

    pub fn invalid_base64() -> Self {
        Self::new(ErrorCode::InvalidBase64, "Invalid base64 string")
    }
}

impl From<ApiError> for ErrorBody {
    fn from(value: ApiError) -> Self {
        ErrorBody::new(value.message)
    }
}

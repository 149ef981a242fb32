//! Response types for the shift earnings API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(code: &str, error: &EngineError, details: &str) -> Self {
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::with_details(code, error.to_string(), details),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            EngineError::InvalidInterval { .. } => ApiErrorResponse::bad_request(
                "INVALID_INTERVAL",
                &error,
                "The shift must end after it starts",
            ),
            EngineError::InvalidBreak { .. } => ApiErrorResponse::bad_request(
                "INVALID_BREAK",
                &error,
                "The break must be shorter than the shift",
            ),
            EngineError::InvalidConfiguration { .. } => ApiErrorResponse::bad_request(
                "INVALID_CONFIGURATION",
                &error,
                "A day-of-month setting is outside 1 to 31",
            ),
            EngineError::InvalidShift { .. } => ApiErrorResponse::bad_request(
                "INVALID_SHIFT",
                &error,
                "The shift data contains invalid information",
            ),
            EngineError::InvalidRepeat { .. } => ApiErrorResponse::bad_request(
                "INVALID_REPEAT",
                &error,
                "The weekly repeat must end on or after the first shift",
            ),
            EngineError::RepeatTooLong { max_weeks, .. } => ApiErrorResponse::bad_request(
                "INVALID_REPEAT",
                &error,
                &format!("A weekly repeat covers at most {} weeks", max_weeks),
            ),
            EngineError::AmountOutOfRange { .. } => ApiErrorResponse::bad_request(
                "AMOUNT_OUT_OF_RANGE",
                &error,
                "The wage and shift length give an amount that cannot be represented",
            ),
            EngineError::InvalidPlace { .. } => ApiErrorResponse::bad_request(
                "INVALID_PLACE",
                &error,
                "The place data contains invalid information",
            ),
            EngineError::InvalidTemplate { .. } => ApiErrorResponse::bad_request(
                "INVALID_TEMPLATE",
                &error,
                "The template data contains invalid information",
            ),
            EngineError::DuplicatePlace { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_PLACE",
                    error.to_string(),
                    "An active place with this name already exists",
                ),
            },
            EngineError::OverlappingShift { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "OVERLAPPING_SHIFT",
                    error.to_string(),
                    "Register as a weekly repeat to replace overlapping shifts",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message.clone(),
                ),
            },
        }
    }
}

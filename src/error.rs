//! Service error taxonomy
//!
//! One crate-wide error enum mapped to stable string codes and HTTP statuses.
//! Handlers return `ServiceError` directly; the `IntoResponse` impl renders
//! the `{code, error, message}` JSON body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient balance")]
    InsufficientFunds,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(String),

    #[error("Recipient cannot be the sending account")]
    InvalidRecipient,

    #[error("Recipient not found")]
    RecipientNotFound,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Database error: {0}")]
    Storage(String),
}

impl ServiceError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidInput(_) => "INVALID_INPUT",
            ServiceError::InvalidAmount => "INVALID_AMOUNT",
            ServiceError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ServiceError::InvalidCredentials => "INVALID_CREDENTIALS",
            ServiceError::Unauthorized(_) => "UNAUTHORIZED",
            ServiceError::InvalidRecipient => "INVALID_RECIPIENT",
            ServiceError::RecipientNotFound => "RECIPIENT_NOT_FOUND",
            ServiceError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            ServiceError::EmailTaken => "EMAIL_TAKEN",
            ServiceError::Storage(_) => "STORAGE_FAILURE",
        }
    }

    /// HTTP status for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_)
            | ServiceError::InvalidAmount
            | ServiceError::InsufficientFunds
            | ServiceError::InvalidRecipient => StatusCode::BAD_REQUEST,
            ServiceError::InvalidCredentials | ServiceError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            ServiceError::RecipientNotFound | ServiceError::AccountNotFound => {
                StatusCode::NOT_FOUND
            }
            ServiceError::EmailTaken => StatusCode::CONFLICT,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Storage(e.to_string())
    }
}

/// JSON response body for errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Storage(ref msg) = self {
            tracing::error!("storage failure: {}", msg);
        }
        let body = ErrorResponse {
            error: self.code(),
            message: self.to_string(),
        };
        (self.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ServiceError::InsufficientFunds.code(), "INSUFFICIENT_FUNDS");
        assert_eq!(ServiceError::EmailTaken.code(), "EMAIL_TAKEN");
        assert_eq!(ServiceError::RecipientNotFound.code(), "RECIPIENT_NOT_FOUND");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            ServiceError::InvalidAmount.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::InsufficientFunds.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::RecipientNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ServiceError::EmailTaken.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ServiceError::Storage("boom".into()).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ServiceError::InsufficientFunds.to_string(),
            "Insufficient balance"
        );
        assert_eq!(
            ServiceError::InvalidInput("bad body".into()).to_string(),
            "Invalid request: bad body"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let err = ServiceError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.code(), "STORAGE_FAILURE");
    }
}

// src/errors.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::SummaryResult;

pub const MISSING_TEXT_MESSAGE: &str = "Missing \"text\" in request body.";

#[derive(Error, Debug)]
pub enum LegalEaseError {
    #[error("{}", MISSING_TEXT_MESSAGE)]
    MissingText,

    #[error("\"apiKey\" must be a string when provided.")]
    InvalidApiKey,

    #[error("Request body exceeds the {limit} byte limit.")]
    PayloadTooLarge { limit: usize },

    #[error("{0}")]
    Config(String),

    /// The provider answered but rejected the call.
    #[error("Gemini API Error: {message}")]
    Api { status: u16, message: String },

    #[error("An unexpected error occurred: {0}")]
    Request(#[from] reqwest::Error),

    #[error("An unexpected error occurred: unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("An unexpected error occurred: the model returned no text")]
    EmptyResponse,
}

impl ResponseError for LegalEaseError {
    /// Upstream and unexpected failures keep a 200 status; callers detect them
    /// through the `error` key of the body.
    fn status_code(&self) -> StatusCode {
        match self {
            LegalEaseError::MissingText | LegalEaseError::InvalidApiKey => StatusCode::BAD_REQUEST,
            LegalEaseError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            LegalEaseError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LegalEaseError::Api { .. }
            | LegalEaseError::Request(_)
            | LegalEaseError::UnexpectedResponse(_)
            | LegalEaseError::EmptyResponse => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SummaryResult::Error {
            error: self.to_string(),
        })
    }
}

pub type Result<T> = std::result::Result<T, LegalEaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_and_config_statuses() {
        assert_eq!(LegalEaseError::MissingText.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(LegalEaseError::InvalidApiKey.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            LegalEaseError::PayloadTooLarge { limit: 10 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            LegalEaseError::Config("no key".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_failures_are_reported_in_body() {
        let err = LegalEaseError::Api {
            status: 403,
            message: "API key not valid.".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::OK);
        assert_eq!(err.to_string(), "Gemini API Error: API key not valid.");

        let err = LegalEaseError::EmptyResponse;
        assert_eq!(err.status_code(), StatusCode::OK);
        assert!(err.to_string().starts_with("An unexpected error occurred: "));
    }

    #[test]
    fn test_missing_text_message() {
        assert_eq!(
            LegalEaseError::MissingText.to_string(),
            "Missing \"text\" in request body."
        );
    }
}

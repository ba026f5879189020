use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::error::Error as StdError;

use crate::clients::ai_gateway::GatewayError;

pub const RATE_LIMIT_MESSAGE: &str =
    "Limite de requisições excedido. Tente novamente em alguns instantes.";
pub const INSUFFICIENT_CREDITS_MESSAGE: &str =
    "Créditos insuficientes. Por favor, adicione créditos à sua conta de IA.";

#[derive(Debug)]
pub enum AppError {
    Internal(String),
    BadRequest(String),
    InvalidRequest(String),
    Configuration(String),
    External(String),
    PaymentRequired(String),
    TooManyRequests(String),
}

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Message handed to the caller. Carries no upstream bodies; those only go to the log.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Internal(e)
            | AppError::BadRequest(e)
            | AppError::InvalidRequest(e)
            | AppError::Configuration(e)
            | AppError::External(e)
            | AppError::PaymentRequired(e)
            | AppError::TooManyRequests(e) => e,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::InvalidRequest(e) => write!(f, "Invalid request body: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
            AppError::External(e) => write!(f, "External service error: {}", e),
            AppError::PaymentRequired(e) => write!(f, "Payment required: {}", e),
            AppError::TooManyRequests(e) => write!(f, "Too many requests: {}", e),
        }
    }
}

impl StdError for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            error: self.public_message().to_string(),
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // The envelope only knows 429/402/500, so an unreadable body is a 500 like any other fault.
            AppError::InvalidRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::External(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::RateLimited => AppError::TooManyRequests(RATE_LIMIT_MESSAGE.to_string()),
            GatewayError::InsufficientCredits => {
                AppError::PaymentRequired(INSUFFICIENT_CREDITS_MESSAGE.to_string())
            }
            GatewayError::Status { status, .. } => {
                AppError::External(format!("AI gateway error: {}", status))
            }
            // Cause is logged by the client; it names the upstream URL.
            GatewayError::Request(_) => AppError::External("AI gateway request failed".to_string()),
            GatewayError::Decode(_) => AppError::External("AI gateway response unreadable".to_string()),
        }
    }
}

use crate::clients::ai_gateway::structs::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::settings::AppSettings;
use crate::error::AppError;
use crate::utils::http_client::new_api_client;
use log::{debug, error, warn};
use reqwest::{Client, StatusCode};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("AI gateway rate limit exceeded")]
    RateLimited,
    #[error("AI gateway credits exhausted")]
    InsufficientCredits,
    #[error("AI gateway error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("AI gateway request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("AI gateway response could not be decoded: {0}")]
    Decode(String),
}

/// Client for an OpenAI-compatible chat completion gateway.
#[derive(Debug)]
pub struct AiGatewayClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AiGatewayClient {
    /// Fails with a configuration error when no API key is set. Nothing is sent in that case.
    pub fn new(app_settings: &AppSettings) -> Result<Self, AppError> {
        let api_key = app_settings
            .ai_gateway
            .api_key
            .as_ref()
            .ok_or_else(|| AppError::Configuration("AI_GATEWAY_API_KEY is not configured".to_string()))?
            .clone();

        let client = new_api_client()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: app_settings.ai_gateway.base_url.clone(),
        })
    }

    // Chat Completions
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GatewayError> {
        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}/chat/completions", self.base_url);

        debug!("Sending chat completion {} to {} (model {})", request_id, url, request.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Request-ID", &request_id)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("AI gateway request {} to {} failed: {}", request_id, url, e);
                GatewayError::Request(e)
            })?;

        let status = response.status();

        if !status.is_success() {
            match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    warn!("AI gateway rate limited request {}", request_id);
                    return Err(GatewayError::RateLimited);
                }
                StatusCode::PAYMENT_REQUIRED => {
                    warn!("AI gateway reported insufficient credits for request {}", request_id);
                    return Err(GatewayError::InsufficientCredits);
                }
                _ => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to get error response".to_string());
                    error!("AI gateway error for request {}: {} {}", request_id, status, body);
                    return Err(GatewayError::Status {
                        status: status.as_u16(),
                        body,
                    });
                }
            }
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read AI gateway response for request {}: {}", request_id, e);
            GatewayError::Request(e)
        })?;
        serde_json::from_slice::<ChatCompletionResponse>(&bytes).map_err(|e| {
            error!(
                "Undecodable AI gateway response for request {}: {} ({})",
                request_id,
                e,
                String::from_utf8_lossy(&bytes)
            );
            GatewayError::Decode(e.to_string())
        })
    }
}

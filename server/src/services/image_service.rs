use log::{info, warn};

use crate::clients::ai_gateway::{AiGatewayClient, ChatCompletionRequest, ChatMessage};
use crate::config::AppSettings;
use crate::error::AppError;
use crate::models::GeneratedImage;

pub fn build_image_prompt(recipe_name: &str) -> String {
    format!(
        "Uma fotografia profissional de comida, apetitosa e bem iluminada, do prato \"{}\", \
servido em um prato bonito sobre uma mesa de madeira, vista levemente de cima. Sem texto na imagem.",
        recipe_name.trim()
    )
}

pub fn build_image_request(model: &str, recipe_name: &str) -> ChatCompletionRequest {
    ChatCompletionRequest::new(model, vec![ChatMessage::user(build_image_prompt(recipe_name))])
        .with_modalities(&["image", "text"])
}

pub struct ImageService {
    client: AiGatewayClient,
    model: String,
}

impl ImageService {
    pub fn new(app_settings: &AppSettings) -> Result<Self, AppError> {
        Ok(Self {
            client: AiGatewayClient::new(app_settings)?,
            model: app_settings.ai_gateway.image_model.clone(),
        })
    }

    /// A response without a picture is not an error: it yields `imageUrl: null`.
    pub async fn generate(&self, recipe_name: &str) -> Result<GeneratedImage, AppError> {
        let request = build_image_request(&self.model, recipe_name);
        let response = self.client.chat_completion(&request).await?;

        let image_url = response.first_image_url().map(str::to_string);
        match &image_url {
            Some(_) => info!("Image generated for recipe '{}'", recipe_name),
            None => warn!("AI returned no image for recipe '{}'", recipe_name),
        }

        Ok(GeneratedImage { image_url })
    }
}

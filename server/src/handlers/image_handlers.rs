use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::config::AppSettings;
use crate::error::AppError;
use crate::models::{GenerateImageRequest, GeneratedImage};
use crate::services::ImageService;

/// Generate an illustrative picture for one recipe card
pub async fn generate_recipe_image(
    app_settings: web::Data<AppSettings>,
    body: web::Json<GenerateImageRequest>,
) -> Result<HttpResponse, AppError> {
    let GenerateImageRequest { recipe_name } = body.into_inner();
    info!("Generating image for recipe: {}", recipe_name);

    let image = illustrate(&app_settings, &recipe_name)
        .await
        .inspect_err(|e| error!("Error in generate-recipe-image: {}", e))?;

    Ok(HttpResponse::Ok().json(image))
}

async fn illustrate(app_settings: &AppSettings, recipe_name: &str) -> Result<GeneratedImage, AppError> {
    let service = ImageService::new(app_settings)?;
    service.generate(recipe_name).await
}

use actix_web::{web, HttpResponse};
use log::{error, info};
use serde_json::Value;

use crate::config::AppSettings;
use crate::error::AppError;
use crate::models::{GenerateRecipesRequest, GenerateRecipesResponse};
use crate::services::recipe_service::{validate_ingredients, RecipeService};

/// Generate three recipe suggestions for the selected ingredients
pub async fn generate_recipes(
    app_settings: web::Data<AppSettings>,
    body: web::Json<GenerateRecipesRequest>,
) -> Result<HttpResponse, AppError> {
    let GenerateRecipesRequest { ingredients } = body.into_inner();
    info!("Generating recipes for ingredients: {:?}", ingredients);

    let recipes = suggest_recipes(&app_settings, &ingredients)
        .await
        .inspect_err(|e| error!("Error in generate-recipes: {}", e))?;

    Ok(HttpResponse::Ok().json(GenerateRecipesResponse { recipes }))
}

async fn suggest_recipes(
    app_settings: &AppSettings,
    ingredients: &[String],
) -> Result<Value, AppError> {
    validate_ingredients(ingredients, app_settings.recipes.require_ingredients)?;

    // Key check happens here, before anything goes out.
    let service = RecipeService::new(app_settings)?;
    service.generate(ingredients).await
}

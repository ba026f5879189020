use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ingredient_catalog::COMMON_INGREDIENTS;

#[derive(Debug, Serialize)]
pub struct IngredientCatalogResponse {
    pub ingredients: Vec<&'static str>,
}

/// Fixed catalog the ingredient picker renders.
pub async fn list_ingredients() -> HttpResponse {
    HttpResponse::Ok().json(IngredientCatalogResponse {
        ingredients: COMMON_INGREDIENTS.to_vec(),
    })
}

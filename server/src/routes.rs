use actix_web::{http::Method, web, HttpResponse};
use crate::error::AppError;
use crate::handlers;

/// Configures every route of the service.
/// The CORS middleware is wrapped around the whole App in main.rs.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Bodies are parsed regardless of Content-Type; failures leave as the usual error envelope.
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    );

    cfg.service(
        web::resource("/health")
            .route(web::get().to(handlers::health::health_check))
    );
    cfg.service(
        web::resource("/ingredients")
            .route(web::get().to(handlers::ingredient_handlers::list_ingredients))
    );

    // Function routes, callable from the browser
    cfg.service(
        web::resource("/generate-recipes")
            .route(web::post().to(handlers::recipe_handlers::generate_recipes))
            .route(web::method(Method::OPTIONS).to(preflight))
    );
    cfg.service(
        web::resource("/generate-recipe-image")
            .route(web::post().to(handlers::image_handlers::generate_recipe_image))
            .route(web::method(Method::OPTIONS).to(preflight))
    );
}

// Answers OPTIONS requests that the CORS middleware lets through (no Origin header).
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

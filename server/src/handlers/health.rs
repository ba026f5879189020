use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::config::AppSettings;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    service: String,
    environment: String,
    version: &'static str,
    gateway_key_configured: bool,
}

/// Reports whether AI calls can succeed without making one.
pub async fn health_check(app_settings: web::Data<AppSettings>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: app_settings.app.name.clone(),
        environment: app_settings.app.environment.clone(),
        version: env!("CARGO_PKG_VERSION"),
        gateway_key_configured: app_settings.ai_gateway.api_key.is_some(),
    })
}

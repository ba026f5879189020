use actix_web::{web, App, HttpServer, middleware::Logger};
use dotenv::dotenv;
use std::net::TcpListener;

use cookbook_server::config::init_config;
use cookbook_server::middleware::cors_from_settings;
use cookbook_server::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load application settings
    let app_settings = match init_config() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load application settings: {}", e);
            log::error!("Cannot start server without valid settings");
            std::process::exit(1);
        }
    };

    if app_settings.ai_gateway.api_key.is_none() {
        log::warn!("AI_GATEWAY_API_KEY is not set; generation requests will fail with 500 until it is configured");
    }

    log::info!(
        "{} ({}) using AI gateway {} (recipes: {}, images: {})",
        app_settings.app.name,
        app_settings.app.environment,
        app_settings.ai_gateway.base_url,
        app_settings.ai_gateway.recipe_model,
        app_settings.ai_gateway.image_model
    );

    let host = &app_settings.server.host;
    let port = app_settings.server.port;

    log::info!("Starting server at http://{}:{}", host, port);

    let server_addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(server_addr)?;

    let app_settings = web::Data::new(app_settings);

    HttpServer::new(move || {
        let cors = cors_from_settings(&app_settings.server);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(app_settings.clone())
            .configure(configure_routes)
    })
    .listen(listener)?
    .run()
    .await
}

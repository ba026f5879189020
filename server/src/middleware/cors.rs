use actix_cors::Cors;

use crate::config::settings::ServerConfig;

/// Headers browser clients send along with function invocations.
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// CORS policy for the public function routes. `*` in `CORS_ORIGINS` opens it to every origin.
pub fn cors_from_settings(server: &ServerConfig) -> Cors {
    let mut cors = Cors::default();

    if server.cors_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin().send_wildcard();
    } else {
        for origin in &server.cors_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors.allowed_methods(["GET", "POST", "OPTIONS"])
        .allowed_headers(ALLOWED_HEADERS)
        .max_age(3600)
}

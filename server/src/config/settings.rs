use std::env;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AI_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_RECIPE_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-2.5-flash-image-preview";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub ai_gateway: AiGatewayConfig,
    pub recipes: RecipeConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub environment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AiGatewayConfig {
    pub base_url: String,
    /// Checked on every invocation rather than at startup.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub recipe_model: String,
    pub image_model: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Reject an empty ingredient list with 400 instead of letting the AI improvise.
    pub require_ingredients: bool,
}

impl AppSettings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key/value source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // App config
        let app_name = lookup("APP_NAME").unwrap_or_else(|| "cookbook".to_string());
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        // Server config
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| AppError::Configuration("SERVER_PORT must be a valid port number".to_string()))?;

        // CORS origins
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // AI gateway
        let gateway_url = lookup("AI_GATEWAY_URL")
            .unwrap_or_else(|| DEFAULT_AI_GATEWAY_URL.to_string());
        url::Url::parse(&gateway_url)
            .map_err(|e| AppError::Configuration(format!("AI_GATEWAY_URL is not a valid URL: {}", e)))?;
        let gateway_url = gateway_url.trim_end_matches('/').to_string();

        let api_key = lookup("AI_GATEWAY_API_KEY").filter(|key| !key.trim().is_empty());

        let recipe_model = lookup("RECIPE_MODEL").unwrap_or_else(|| DEFAULT_RECIPE_MODEL.to_string());
        let image_model = lookup("IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());

        // Recipe generation
        let require_ingredients = lookup("REQUIRE_INGREDIENTS")
            .unwrap_or_else(|| "false".to_string())
            .parse::<bool>()
            .map_err(|_| AppError::Configuration("REQUIRE_INGREDIENTS must be true or false".to_string()))?;

        Ok(Self {
            app: AppConfig {
                name: app_name,
                environment,
            },
            server: ServerConfig {
                host: server_host,
                port: server_port,
                cors_origins,
            },
            ai_gateway: AiGatewayConfig {
                base_url: gateway_url,
                api_key,
                recipe_model,
                image_model,
            },
            recipes: RecipeConfig {
                require_ingredients,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<AppSettings, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.cors_origins, vec!["*".to_string()]);
        assert_eq!(settings.ai_gateway.base_url, DEFAULT_AI_GATEWAY_URL);
        assert_eq!(settings.ai_gateway.recipe_model, DEFAULT_RECIPE_MODEL);
        assert_eq!(settings.ai_gateway.image_model, DEFAULT_IMAGE_MODEL);
        assert!(settings.ai_gateway.api_key.is_none());
        assert!(!settings.recipes.require_ingredients);
    }

    #[test]
    fn test_missing_api_key_is_not_fatal_at_startup() {
        let settings = settings_from(&[("AI_GATEWAY_API_KEY", "   ")]).unwrap();
        assert!(settings.ai_gateway.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("SERVER_PORT", "3000"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("AI_GATEWAY_URL", "http://127.0.0.1:9999/v1/"),
            ("AI_GATEWAY_API_KEY", "sk-test"),
            ("REQUIRE_INGREDIENTS", "true"),
        ])
        .unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(
            settings.server.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(settings.ai_gateway.base_url, "http://127.0.0.1:9999/v1");
        assert_eq!(settings.ai_gateway.api_key.as_deref(), Some("sk-test"));
        assert!(settings.recipes.require_ingredients);
    }

    #[test]
    fn test_invalid_values_are_configuration_errors() {
        assert!(matches!(
            settings_from(&[("SERVER_PORT", "eighty")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            settings_from(&[("AI_GATEWAY_URL", "not a url")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            settings_from(&[("REQUIRE_INGREDIENTS", "maybe")]),
            Err(AppError::Configuration(_))
        ));
    }
}

use log::{error, info, warn};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::clients::ai_gateway::{
    AiGatewayClient, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, FunctionDefinition,
};
use crate::config::AppSettings;
use crate::error::AppError;
use crate::models::Difficulty;

pub const SUGGEST_RECIPES_FUNCTION: &str = "suggest_recipes";
pub const RECIPES_PER_REQUEST: usize = 3;

const SYSTEM_PROMPT: &str = "Você é um chef especialista em culinária criativa. A partir dos ingredientes \
fornecidos, sugira 3 receitas deliciosas e viáveis.

Para cada receita, informe:
- Nome da receita (criativo e apetitoso)
- Tempo de preparo estimado
- Dificuldade (Fácil, Médio, Difícil)
- Lista completa de ingredientes (os fornecidos e os demais necessários)
- Modo de preparo passo a passo (5 a 8 passos)
- Descrição breve e apetitosa

Seja criativo, mas prático. Os ingredientes fornecidos devem ser os principais de cada receita.";

/// JSON Schema of the `suggest_recipes` arguments: exactly three recipes, six fields each, nothing extra.
static SUGGEST_RECIPES_PARAMETERS: Lazy<Value> = Lazy::new(|| {
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Nome da receita" },
                        "prepTime": { "type": "string", "description": "Tempo de preparo" },
                        "difficulty": { "type": "string", "enum": difficulties },
                        "description": { "type": "string", "description": "Descrição breve e apetitosa" },
                        "ingredients": { "type": "array", "items": { "type": "string" }, "minItems": 1 },
                        "steps": { "type": "array", "items": { "type": "string" }, "minItems": 1 }
                    },
                    "required": ["name", "prepTime", "difficulty", "description", "ingredients", "steps"],
                    "additionalProperties": false
                },
                "minItems": RECIPES_PER_REQUEST,
                "maxItems": RECIPES_PER_REQUEST
            }
        },
        "required": ["recipes"],
        "additionalProperties": false
    })
});

/// Only the `recipes` key is required; its content is handed back untouched.
#[derive(Debug, Deserialize)]
struct SuggestRecipesArguments {
    recipes: Value,
}

pub fn suggest_recipes_function() -> FunctionDefinition {
    FunctionDefinition {
        name: SUGGEST_RECIPES_FUNCTION.to_string(),
        description: "Retorna 3 sugestões de receitas baseadas nos ingredientes".to_string(),
        parameters: SUGGEST_RECIPES_PARAMETERS.clone(),
    }
}

/// Ingredients are joined with ", " in the order the caller sent them.
pub fn build_user_prompt(ingredients: &[String]) -> String {
    format!(
        "Ingredientes disponíveis: {}\n\nPor favor, sugira 3 receitas deliciosas usando esses ingredientes.",
        ingredients.join(", ")
    )
}

pub fn build_recipe_request(model: &str, ingredients: &[String]) -> ChatCompletionRequest {
    ChatCompletionRequest::new(
        model,
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(ingredients)),
        ],
    )
    .with_forced_tool(suggest_recipes_function())
}

/// Pulls the recipes out of the first tool call. Shape is trusted to the schema; only decoding is checked.
pub fn parse_recipes(response: &ChatCompletionResponse) -> Result<Value, AppError> {
    let tool_call = response.first_tool_call().ok_or_else(|| {
        error!("AI response carried no tool call: {:?}", response.first_message());
        AppError::External("No tool call in AI response".to_string())
    })?;

    if tool_call.function.name != SUGGEST_RECIPES_FUNCTION {
        warn!("AI called unexpected function '{}'", tool_call.function.name);
    }

    let arguments: SuggestRecipesArguments = serde_json::from_str(&tool_call.function.arguments)
        .map_err(|e| {
            error!("Malformed tool call arguments ({}): {}", e, tool_call.function.arguments);
            AppError::External("Malformed tool call arguments in AI response".to_string())
        })?;

    match arguments.recipes.as_array() {
        Some(recipes) if recipes.len() == RECIPES_PER_REQUEST => {}
        Some(recipes) => warn!(
            "AI returned {} recipes instead of {}",
            recipes.len(),
            RECIPES_PER_REQUEST
        ),
        None => warn!("AI returned recipes that are not a list"),
    }

    Ok(arguments.recipes)
}

/// Rejects an empty list only when `REQUIRE_INGREDIENTS` is on; otherwise the AI gets a blank prompt.
pub fn validate_ingredients(ingredients: &[String], require_ingredients: bool) -> Result<(), AppError> {
    if require_ingredients && ingredients.iter().all(|i| i.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "Selecione pelo menos um ingrediente.".to_string(),
        ));
    }
    Ok(())
}

pub struct RecipeService {
    client: AiGatewayClient,
    model: String,
}

impl RecipeService {
    pub fn new(app_settings: &AppSettings) -> Result<Self, AppError> {
        Ok(Self {
            client: AiGatewayClient::new(app_settings)?,
            model: app_settings.ai_gateway.recipe_model.clone(),
        })
    }

    pub async fn generate(&self, ingredients: &[String]) -> Result<Value, AppError> {
        let request = build_recipe_request(&self.model, ingredients);
        let response = self.client.chat_completion(&request).await?;
        info!("AI response received");

        parse_recipes(&response)
    }
}

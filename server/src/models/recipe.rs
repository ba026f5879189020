use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Difficulty levels the AI is told to use. Replies are not checked against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRecipesRequest {
    pub ingredients: Vec<String>,
}

/// `recipes` is the tool-call content exactly as the AI produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRecipesResponse {
    pub recipes: Value,
}

//! Fixtures shared by the in-crate tests.

use crate::config::AppSettings;
use serde_json::{json, Value};

/// Default settings pointed at a mock gateway.
pub(crate) fn test_settings(base_url: &str, api_key: Option<&str>) -> AppSettings {
    let mut settings = AppSettings::from_lookup(|_| None).expect("default settings");
    settings.ai_gateway.base_url = base_url.trim_end_matches('/').to_string();
    settings.ai_gateway.api_key = api_key.map(str::to_string);
    settings
}

pub(crate) fn sample_recipes() -> Value {
    json!([
        {
            "name": "Frango Grelhado com Arroz de Alho",
            "prepTime": "40 minutos",
            "difficulty": "Fácil",
            "description": "Frango suculento com arroz soltinho e perfumado.",
            "ingredients": ["2 filés de Frango", "1 xícara de Arroz", "3 dentes de alho", "Sal"],
            "steps": ["Tempere o frango.", "Grelhe por 8 minutos de cada lado.", "Refogue o alho e cozinhe o arroz."]
        },
        {
            "name": "Risoto de Frango",
            "prepTime": "50 minutos",
            "difficulty": "Médio",
            "description": "Cremoso e reconfortante.",
            "ingredients": ["Frango desfiado", "Arroz arbóreo", "Caldo de legumes", "Queijo"],
            "steps": ["Refogue o arroz.", "Adicione o caldo aos poucos.", "Finalize com o frango e o queijo."]
        },
        {
            "name": "Galinhada Mineira",
            "prepTime": "1 hora e 15 minutos",
            "difficulty": "Difícil",
            "description": "Clássico caipira cheio de sabor.",
            "ingredients": ["Frango em pedaços", "Arroz", "Açafrão", "Cebola"],
            "steps": ["Doure o frango.", "Junte a cebola e o açafrão.", "Cozinhe o arroz junto ao frango."]
        }
    ])
}

/// Gateway body whose first choice carries one `suggest_recipes` call with raw `arguments`.
pub(crate) fn tool_call_response(arguments: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "model": "google/gemini-2.5-flash",
        "choices": [{
            "index": 0,
            "finish_reason": "tool_calls",
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_0",
                    "type": "function",
                    "function": { "name": "suggest_recipes", "arguments": arguments }
                }]
            }
        }]
    })
    .to_string()
}

/// Gateway body with a plain text answer and no tool call.
pub(crate) fn text_only_response() -> String {
    json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": { "role": "assistant", "content": "Aqui estão algumas receitas..." }
        }]
    })
    .to_string()
}

/// Gateway body of an image model; `None` leaves the `images` list out.
pub(crate) fn image_response(url: Option<&str>) -> String {
    let mut message = json!({ "role": "assistant", "content": "Aqui está a imagem." });
    if let Some(url) = url {
        message["images"] = json!([{ "type": "image_url", "image_url": { "url": url } }]);
    }
    json!({ "id": "chatcmpl-image", "choices": [{ "index": 0, "message": message }] }).to_string()
}

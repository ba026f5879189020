use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

// Chat Completion Request Structs
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Option<Vec<ToolDefinition>>,
    pub tool_choice: Option<ToolChoice>,
    /// Output kinds for image-capable models, e.g. `["image", "text"]`.
    pub modalities: Option<Vec<String>>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            tools: None,
            tool_choice: None,
            modalities: None,
        }
    }

    /// Offers exactly one function and forces the model to call it.
    pub fn with_forced_tool(mut self, function: FunctionDefinition) -> Self {
        self.tool_choice = Some(ToolChoice::function(&function.name));
        self.tools = Some(vec![ToolDefinition {
            tool_type: "function".to_string(),
            function,
        }]);
        self
    }

    pub fn with_modalities(mut self, modalities: &[&str]) -> Self {
        self.modalities = Some(modalities.iter().map(|m| m.to_string()).collect());
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the function arguments.
    pub parameters: Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub choice_type: String,
    pub function: ToolChoiceFunction,
}

impl ToolChoice {
    pub fn function(name: &str) -> Self {
        Self {
            choice_type: "function".to_string(),
            function: ToolChoiceFunction { name: name.to_string() },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolChoiceFunction {
    pub name: String,
}

// Chat Completion Response Structs
// Everything optional: the gateway is treated as an untrusted source and shape checks happen in the services.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    pub fn first_message(&self) -> Option<&ResponseMessage> {
        self.choices.first().and_then(|choice| choice.message.as_ref())
    }

    /// First tool call of the first choice.
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.first_message()
            .and_then(|message| message.tool_calls.as_ref())
            .and_then(|calls| calls.first())
    }

    /// First generated image of the first choice.
    pub fn first_image_url(&self) -> Option<&str> {
        self.first_message()
            .and_then(|message| message.images.as_ref())
            .and_then(|images| images.first())
            .map(|image| image.image_url.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatChoice {
    pub index: Option<i32>,
    pub message: Option<ResponseMessage>,
    pub finish_reason: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ResponseMessage {
    pub role: Option<String>,
    pub content: Option<String>,
    pub tool_calls: Option<Vec<ToolCall>>,
    pub images: Option<Vec<ResponseImage>>,
}

#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ToolCall {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub call_type: Option<String>,
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: String,
    /// JSON-encoded arguments, as produced by the model. May be malformed.
    #[serde(default)]
    pub arguments: String,
}

#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResponseImage {
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    pub image_url: ImageUrl,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImageUrl {
    pub url: String,
}

use serde::Deserialize;

use crate::{AssistConfig, AssistError, Prompt, TextGenerator};

/// OpenAI-compatible `chat/completions` client.
pub struct OpenAiGenerator {
    agent: ureq::Agent,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiGenerator {
    pub fn new(config: &AssistConfig) -> Result<Self, AssistError> {
        let api_key = config.api_key.clone().ok_or(AssistError::MissingApiKey)?;
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Ok(Self {
            agent,
            api_key,
            model: config.model.clone(),
            url: format!("{}/chat/completions", config.base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OpenAiGenerator {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn generate(&self, prompt: &Prompt) -> Result<String, AssistError> {
        let body = request_body(&self.model, prompt);
        let mut resp = self
            .agent
            .post(&self.url)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send(body.to_string())?;
        let text = resp.body_mut().read_to_string()?;
        parse_completion(&text)
    }
}

fn request_body(model: &str, prompt: &Prompt) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            { "role": "system", "content": prompt.system },
            { "role": "user", "content": prompt.user },
        ],
    })
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn parse_completion(body: &str) -> Result<String, AssistError> {
    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| AssistError::Decode(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|s| !s.trim().is_empty())
        .ok_or(AssistError::EmptyCompletion)
}

pub mod auto_resolution;
pub mod canned;
pub mod insights;
pub mod openai;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use auto_resolution::{auto_resolution, AutoResolutionReport, AutoResolutionTotals};
pub use canned::CannedGenerator;
pub use insights::{insights, Impact, Insight, InsightKind};
pub use openai::OpenAiGenerator;

// ── Errors ──

#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("malformed chat request: {0}")]
    MalformedRequest(String),
    #[error("no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("upstream request failed: {0}")]
    Upstream(#[from] ureq::Error),
    #[error("upstream returned an undecodable body: {0}")]
    Decode(String),
    #[error("upstream returned an empty completion")]
    EmptyCompletion,
}

// ── Config ──

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-generation provider settings.
#[derive(Clone, Debug)]
pub struct AssistConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AssistConfig {
    /// Read `OPENAI_API_KEY`, `CIARP_MODEL`, `CIARP_OPENAI_BASE_URL` and
    /// `CIARP_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AssistConfig::from_env`] over an arbitrary variable source.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get("OPENAI_API_KEY"),
            model: get("CIARP_MODEL").unwrap_or(defaults.model),
            base_url: get("CIARP_OPENAI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: get("CIARP_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

// ── Wire types ──

/// Body of `POST /ai-chat`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(
        rename = "conversationData",
        alias = "context",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_data: Option<serde_json::Value>,
}

fn default_domain() -> String {
    "general".to_string()
}

impl ChatRequest {
    /// Parse a raw body. Non-JSON, a missing `message` or a blank `message`
    /// are all malformed.
    pub fn from_slice(body: &[u8]) -> Result<Self, AssistError> {
        let req: ChatRequest = serde_json::from_slice(body)
            .map_err(|e| AssistError::MalformedRequest(e.to_string()))?;
        if req.message.trim().is_empty() {
            return Err(AssistError::MalformedRequest("message is empty".to_string()));
        }
        Ok(req)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
}

// ── Prompt ──

/// A fully templated prompt plus the raw inputs it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub domain: String,
    pub message: String,
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn build(req: &ChatRequest) -> Self {
        Self {
            domain: req.domain.clone(),
            message: req.message.clone(),
            system: system_prompt(&req.domain),
            user: user_prompt(&req.message, req.conversation_data.as_ref()),
        }
    }
}

pub fn system_prompt(domain: &str) -> String {
    format!(
        "You are an AI assistant specialized in conversation intelligence and customer service analytics. \
You help analyze customer service conversations, identify patterns, and provide actionable insights.

Context:
- Domain: {domain}
- You have access to conversation data including transcripts, emotions, intents, and resolution outcomes
- Focus on providing practical, data-driven insights and recommendations

Capabilities:
- Conversation sentiment and emotion analysis
- Intent classification and pattern recognition
- Performance metrics and trend identification
- Agent coaching recommendations
- Customer satisfaction improvement strategies
- Predictive analytics for escalation prevention

Respond in a helpful, professional manner with specific, actionable insights when possible."
    )
}

pub fn user_prompt(message: &str, context: Option<&serde_json::Value>) -> String {
    let context = context
        .map(|c| {
            let pretty = serde_json::to_string_pretty(c).unwrap_or_else(|_| c.to_string());
            format!("Conversation context: {pretty}")
        })
        .unwrap_or_default();
    format!(
        "User message: {message}\n\n{context}\n\nPlease provide a helpful response with specific insights and recommendations."
    )
}

// ── Generation ──

/// A text-generation backend. Implementations make a single attempt.
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, prompt: &Prompt) -> Result<String, AssistError>;
}

/// Template the request, call `generator` once, and wrap the reply.
pub fn respond(generator: &dyn TextGenerator, req: &ChatRequest) -> Result<ChatReply, AssistError> {
    let prompt = Prompt::build(req);
    let text = generator.generate(&prompt)?;
    if text.trim().is_empty() {
        return Err(AssistError::EmptyCompletion);
    }
    tracing::debug!(
        provider = generator.name(),
        domain = %req.domain,
        chars = text.len(),
        "generated reply"
    );
    Ok(ChatReply { response: text })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Echo;

    impl TextGenerator for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }
        fn generate(&self, prompt: &Prompt) -> Result<String, AssistError> {
            Ok(prompt.user.clone())
        }
    }

    struct Blank;

    impl TextGenerator for Blank {
        fn name(&self) -> &'static str {
            "blank"
        }
        fn generate(&self, _prompt: &Prompt) -> Result<String, AssistError> {
            Ok("  ".to_string())
        }
    }

    #[test]
    fn parse_full_request() {
        let body = br#"{"message":"why escalations?","domain":"yacht-brokerage","conversationData":{"id":"2"}}"#;
        let req = ChatRequest::from_slice(body).unwrap();
        assert_eq!(req.message, "why escalations?");
        assert_eq!(req.domain, "yacht-brokerage");
        assert_eq!(req.conversation_data, Some(serde_json::json!({"id": "2"})));
    }

    #[test]
    fn parse_defaults_domain() {
        let req = ChatRequest::from_slice(br#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.domain, "general");
        assert!(req.conversation_data.is_none());
    }

    #[test]
    fn parse_rejects_missing_or_blank_message() {
        for body in [
            &br#"{"domain":"x"}"#[..],
            br#"{"message":"   ","domain":"x"}"#,
            br#"{"message":42}"#,
            b"not json",
            b"",
        ] {
            assert!(matches!(
                ChatRequest::from_slice(body),
                Err(AssistError::MalformedRequest(_))
            ));
        }
    }

    #[test]
    fn system_prompt_names_domain() {
        let p = system_prompt("healthcare");
        assert!(p.contains("- Domain: healthcare\n"));
        assert!(p.starts_with("You are an AI assistant specialized in conversation intelligence"));
    }

    #[test]
    fn user_prompt_embeds_context_when_present() {
        let ctx = serde_json::json!({"emotion": "frustrated"});
        let with = user_prompt("summarize", Some(&ctx));
        assert!(with.starts_with("User message: summarize\n\n"));
        assert!(with.contains("Conversation context: {\n  \"emotion\": \"frustrated\"\n}"));

        let without = user_prompt("summarize", None);
        assert!(!without.contains("Conversation context"));
        assert!(without.ends_with("specific insights and recommendations."));
    }

    #[test]
    fn respond_passes_prompt_through() {
        let req = ChatRequest::from_slice(br#"{"message":"trends?","domain":"retail"}"#).unwrap();
        let reply = respond(&Echo, &req).unwrap();
        assert!(reply.response.contains("User message: trends?"));
    }

    #[test]
    fn respond_rejects_empty_completion() {
        let req = ChatRequest::from_slice(br#"{"message":"x"}"#).unwrap();
        assert!(matches!(
            respond(&Blank, &req),
            Err(AssistError::EmptyCompletion)
        ));
    }

    #[test]
    fn config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("OPENAI_API_KEY", "sk-test"),
            ("CIARP_MODEL", "gpt-4o"),
            ("CIARP_OPENAI_BASE_URL", "http://localhost:11434/v1/"),
            ("CIARP_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();
        let cfg = AssistConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.base_url, "http://localhost:11434/v1");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn config_defaults_when_unset_or_blank() {
        let cfg = AssistConfig::from_lookup(|k| (k == "OPENAI_API_KEY").then(|| " ".to_string()));
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
    }
}

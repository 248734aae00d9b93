use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use ciarp_assist::{AutoResolutionReport, ChatRequest, Insight, TextGenerator};
use ciarp_core::{AggregateSnapshot, Analytics, ConversationRecord};
use ciarp_live::{LiveMonitor, SharedMonitor};
use ciarp_store::{ConversationStore, FilterCriteria};

/// Error body returned by `/ai-chat` for any failure. Details stay in the log.
pub const CHAT_FAILURE: &str = "Failed to generate AI response";

// ── Config ──

pub struct ServeConfig {
    pub bind: String,
    pub port: u16,
    pub tick: Duration,
}

// ── App State ──

/// Everything the handlers read. Cloning shares the same store, provider
/// and monitor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ConversationStore>,
    pub generator: Arc<dyn TextGenerator>,
    pub live: SharedMonitor,
}

impl AppState {
    pub fn new(store: ConversationStore, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            store: Arc::new(store),
            generator,
            live: Arc::new(RwLock::new(LiveMonitor::default())),
        }
    }
}

// ── Error Handling ──

struct AppError(StatusCode, String);

impl AppError {
    fn not_found(what: impl Into<String>) -> Self {
        Self(StatusCode::NOT_FOUND, what.into())
    }

    fn chat_failure() -> Self {
        Self(StatusCode::INTERNAL_SERVER_ERROR, CHAT_FAILURE.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.1 });
        (self.0, Json(body)).into_response()
    }
}

// ── Entrypoint ──

pub async fn serve(state: AppState, config: ServeConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "ciarp HTTP server listening on http://{addr}");

    let ticker = ciarp_live::spawn_ticker(state.live.clone(), config.tick, StdRng::from_entropy());
    let app = router(state);
    let result = axum::serve(listener, app).await;
    ticker.abort();
    result?;
    Ok(())
}

/// Build the router (for testing without binding to a port).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/conversations", get(list_conversations))
        .route("/api/conversations/{id}", get(get_conversation))
        .route("/api/summary", get(get_summary))
        .route("/api/analytics", get(get_analytics))
        .route("/api/live", get(get_live))
        .route("/api/insights", get(get_insights))
        .route("/api/auto-resolution", get(get_auto_resolution))
        .route("/ai-chat", post(post_ai_chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

// ── GET /api/conversations ──

#[derive(Serialize)]
struct ConversationsResponse {
    conversations: Vec<ConversationRecord>,
}

async fn list_conversations(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ConversationsResponse> {
    let criteria = FilterCriteria::from_pairs(pairs);
    Json(ConversationsResponse {
        conversations: state.store.filter(&criteria),
    })
}

// ── GET /api/conversations/{id} ──

async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConversationRecord>, AppError> {
    state
        .store
        .get_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("conversation '{id}' not found")))
}

// ── GET /api/summary, /api/analytics ──

async fn get_summary(State(state): State<AppState>) -> Json<AggregateSnapshot> {
    Json(state.store.summarize())
}

async fn get_analytics(State(state): State<AppState>) -> Json<Analytics> {
    Json(state.store.analytics())
}

// ── GET /api/live ──

#[derive(Serialize)]
struct LiveResponse {
    #[serde(flatten)]
    monitor: LiveMonitor,
    suggestion: &'static str,
}

async fn get_live(State(state): State<AppState>) -> Json<LiveResponse> {
    let monitor = state.live.read().await.clone();
    let suggestion = monitor.suggestion(&mut rand::thread_rng());
    Json(LiveResponse {
        monitor,
        suggestion,
    })
}

// ── GET /api/insights ──

#[derive(Serialize)]
struct InsightsResponse {
    insights: Vec<Insight>,
}

async fn get_insights() -> Json<InsightsResponse> {
    Json(InsightsResponse {
        insights: ciarp_assist::insights(),
    })
}

// ── GET /api/auto-resolution ──

async fn get_auto_resolution() -> Json<AutoResolutionReport> {
    Json(ciarp_assist::auto_resolution())
}

// ── POST /ai-chat ──

async fn post_ai_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ciarp_assist::ChatReply>, AppError> {
    let req = match ChatRequest::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "rejected /ai-chat request");
            return Err(AppError::chat_failure());
        }
    };

    let generator = state.generator.clone();
    let provider = generator.name();
    let outcome =
        tokio::task::spawn_blocking(move || ciarp_assist::respond(generator.as_ref(), &req)).await;

    match outcome {
        Ok(Ok(reply)) => Ok(Json(reply)),
        Ok(Err(e)) => {
            tracing::error!(provider, error = %e, "AI chat generation failed");
            Err(AppError::chat_failure())
        }
        Err(e) => {
            tracing::error!(provider, error = %e, "AI chat task panicked");
            Err(AppError::chat_failure())
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use ciarp_assist::{AssistError, CannedGenerator, Prompt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Counts calls and returns a fixed reply or a failure.
    struct StubGenerator {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubGenerator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    impl TextGenerator for StubGenerator {
        fn name(&self) -> &'static str {
            "stub"
        }
        fn generate(&self, prompt: &Prompt) -> Result<String, AssistError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AssistError::Decode("upstream said 502 with secret-token".into()));
            }
            Ok(format!("stub reply for {}", prompt.domain))
        }
    }

    fn app_with(generator: Arc<dyn TextGenerator>) -> Router {
        router(AppState::new(ConversationStore::seeded(), generator))
    }

    fn app() -> Router {
        app_with(Arc::new(CannedGenerator))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_chat(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ai-chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, json) = get_json(app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn conversations_unfiltered_returns_all() {
        let (status, json) = get_json(app(), "/api/conversations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["conversations"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn conversations_filter_by_query() {
        let (_, json) = get_json(app(), "/api/conversations?emotion=frustrated").await;
        let ids: Vec<&str> = json["conversations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["1", "5"]);

        let (_, json) = get_json(app(), "/api/conversations?q=yacht&resolution=resolved").await;
        assert_eq!(json["conversations"].as_array().unwrap().len(), 4);

        let (status, json) = get_json(app(), "/api/conversations?emotion=furious").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["conversations"].as_array().unwrap().is_empty());
    }

    fn conversation_ids(json: &serde_json::Value) -> Vec<String> {
        json["conversations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn conversations_repeated_keys_use_last_value() {
        let (status, json) =
            get_json(app(), "/api/conversations?emotion=calm&emotion=frustrated").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(conversation_ids(&json), ["1", "5"]);

        let (status, json) =
            get_json(app(), "/api/conversations?q=yacht&search_term=kevin%20chen").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(conversation_ids(&json), ["7"]);

        let (status, json) =
            get_json(app(), "/api/conversations?intent=Technical%20Support&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(conversation_ids(&json), ["2", "7"]);
    }

    #[tokio::test]
    async fn conversation_by_id() {
        let (status, json) = get_json(app(), "/api/conversations/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["customer_name"], "Lisa Chen");
        assert_eq!(json["emotion"], "excited");

        let (status, json) = get_json(app(), "/api/conversations/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn summary_counts() {
        let (status, json) = get_json(app(), "/api/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_count"], 7);
        assert_eq!(json["counts_by_resolution"]["resolved"], 6);
        assert_eq!(json["counts_by_resolution"]["pending"], 0);
        assert_eq!(json["counts_by_emotion"]["frustrated"], 2);
    }

    #[tokio::test]
    async fn analytics_on_empty_store_has_null_rates() {
        let state = AppState::new(
            ConversationStore::from_records(vec![]).unwrap(),
            Arc::new(CannedGenerator),
        );
        let (status, json) = get_json(router(state), "/api/analytics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_conversations"], 0);
        assert!(json["resolution_rate"].is_null());
    }

    #[tokio::test]
    async fn live_reports_monitor_state() {
        let (status, json) = get_json(app(), "/api/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["calls"].as_array().unwrap().len(), 4);
        assert_eq!(json["metrics"]["total_active"], 12);
        assert!(ciarp_live::AGENT_SUGGESTIONS.contains(&json["suggestion"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn insights_lists_cards() {
        let (status, json) = get_json(app(), "/api/insights").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["insights"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn auto_resolution_reports_weighted_rate() {
        let (status, json) = get_json(app(), "/api/auto-resolution").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["overall_auto_rate"], 83);
        assert_eq!(json["total_conversations"], 907);
        assert_eq!(json["categories"].as_array().unwrap().len(), 6);
        assert_eq!(json["templates"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn ai_chat_returns_response() {
        let stub = StubGenerator::new(false);
        let (status, json) = post_chat(
            app_with(stub.clone()),
            r#"{"message":"what drives escalations?","domain":"yacht-brokerage","conversationData":{"id":"2"}}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["response"], "stub reply for yacht-brokerage");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn ai_chat_offline_reply_is_non_empty() {
        let (status, json) = post_chat(app(), r#"{"message":"analyze","domain":"retail"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!json["response"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn ai_chat_malformed_body_skips_upstream() {
        let stub = StubGenerator::new(false);
        for body in [r#"{"domain":"x"}"#, "not json", r#"{"message":"  "}"#] {
            let (status, json) = post_chat(app_with(stub.clone()), body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json["error"], CHAT_FAILURE);
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ai_chat_upstream_failure_hides_detail() {
        let stub = StubGenerator::new(true);
        let (status, json) = post_chat(app_with(stub.clone()), r#"{"message":"hi"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], CHAT_FAILURE);
        assert!(!json.to_string().contains("secret-token"));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Service version plus which integrations are live and which run on fallbacks.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let enabled = |on: bool| if on { "enabled" } else { "fallback" };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "intervue-api",
        "integrations": {
            "store": state.store.backend(),
            "job_search": enabled(state.job_search.is_some()),
            "question_service": state.question_provider.name(),
            "job_matcher": state.job_matcher.name(),
            "llm": enabled(state.config.anthropic_api_key.is_some()),
            "archive": enabled(state.archive.is_some()),
        }
    }))
}

mod archive;
mod config;
mod errors;
mod interview;
mod jobs;
mod llm_client;
mod resume;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::archive::ResumeArchive;
use crate::config::Config;
use crate::interview::provider::{
    FallbackQuestionProvider, HttpQuestionProvider, LlmQuestionProvider, QuestionProvider,
};
use crate::jobs::matching::KeywordJobMatcher;
use crate::jobs::search::JobSearchClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{KvStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Intervue API v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.http_timeout_secs);

    let store = build_store(&config).await;
    info!("Key/value store: {}", store.backend());

    let question_provider = Arc::new(FallbackQuestionProvider::new(build_question_provider(
        &config, timeout,
    )));
    info!("Question provider: {}", question_provider.name());

    let job_search = match &config.job_search_api_key {
        Some(key) => match JobSearchClient::new(&config.job_search_url, key, timeout) {
            Ok(client) => {
                info!("Job search enabled ({})", config.job_search_url);
                Some(client)
            }
            Err(e) => {
                warn!("Job search client could not be built, using fallback jobs: {e}");
                None
            }
        },
        None => {
            info!("JOB_SEARCH_API_KEY not set, using fallback jobs");
            None
        }
    };

    let archive = match &config.s3 {
        Some(s3) => {
            info!("Resume archive enabled (bucket: {})", s3.bucket);
            Some(ResumeArchive::from_config(s3).await)
        }
        None => None,
    };

    let state = AppState {
        store,
        question_provider,
        job_matcher: Arc::new(KeywordJobMatcher),
        job_search,
        archive,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when configured and reachable, otherwise the in-process store.
async fn build_store(config: &Config) -> Arc<dyn KvStore> {
    let Some(url) = &config.redis_url else {
        return Arc::new(MemoryStore::default());
    };

    match RedisStore::connect(url, config.session_ttl_secs).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Redis unavailable ({e}), falling back to in-memory store");
            Arc::new(MemoryStore::default())
        }
    }
}

/// The external question service wins over the LLM; neither means static bank only.
fn build_question_provider(
    config: &Config,
    timeout: Duration,
) -> Option<Arc<dyn QuestionProvider>> {
    if let Some(url) = &config.question_service_url {
        match HttpQuestionProvider::new(url.clone(), timeout) {
            Ok(provider) => return Some(Arc::new(provider)),
            Err(e) => warn!("Question service client could not be built: {e}"),
        }
    }

    if let Some(key) = &config.anthropic_api_key {
        match LlmClient::new(key.clone(), timeout) {
            Ok(client) => {
                info!("LLM question generation enabled (model: {})", llm_client::MODEL);
                return Some(Arc::new(LlmQuestionProvider(client)));
            }
            Err(e) => warn!("LLM client could not be built: {e}"),
        }
    }

    None
}

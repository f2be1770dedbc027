use std::sync::Arc;

use crate::archive::ResumeArchive;
use crate::config::Config;
use crate::interview::provider::QuestionProvider;
use crate::jobs::matching::JobMatcher;
use crate::jobs::search::JobSearchClient;
use crate::store::KvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Candidate profiles and interview sessions. Redis when `REDIS_URL` is set.
    pub store: Arc<dyn KvStore>,
    /// Always a `FallbackQuestionProvider`, so generation never fails outright.
    pub question_provider: Arc<dyn QuestionProvider>,
    pub job_matcher: Arc<dyn JobMatcher>,
    /// `None` without `JOB_SEARCH_API_KEY`; recommendations then use the static listings.
    pub job_search: Option<JobSearchClient>,
    pub archive: Option<ResumeArchive>,
    pub config: Config,
}

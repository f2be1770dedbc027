//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::fallback::{fallback_listings, FALLBACK_SOURCE};
use crate::jobs::insights::{career_insights, CareerInsights};
use crate::jobs::listing::{JobListing, Urgency};
use crate::jobs::matching::{score_or_fallback, JobMatcher, MatchProfile};
use crate::jobs::search::{enhance_search, JobSearchQuery, SEARCH_SOURCE};
use crate::resume::profile::CandidateProfile;
use crate::state::AppState;
use crate::store::{candidate_key, get_json};

pub const UNAVAILABLE_SOURCE: &str = "unavailable";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobListing>,
    pub total: usize,
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub candidate_id: Option<Uuid>,
    pub profile: Option<MatchProfile>,
    pub location: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub jobs: Vec<JobListing>,
    pub insights: CareerInsights,
    pub query: JobSearchQuery,
    pub source: String,
    pub matcher: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/search
///
/// Formatted, unscored listings. Search failures answer with an empty list.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(query): Json<JobSearchQuery>,
) -> Result<Json<JobSearchResponse>, AppError> {
    if query.keywords.trim().is_empty() {
        return Err(AppError::Validation("keywords cannot be empty".to_string()));
    }

    let (jobs, source) = match &state.job_search {
        Some(client) => match client.search(&query).await {
            Ok(jobs) => (jobs, SEARCH_SOURCE),
            Err(e) => {
                warn!("Job search failed, returning no jobs: {e}");
                (Vec::new(), UNAVAILABLE_SOURCE)
            }
        },
        None => {
            warn!("Job search is not configured, returning no jobs");
            (Vec::new(), UNAVAILABLE_SOURCE)
        }
    };

    Ok(Json(JobSearchResponse {
        total: jobs.len(),
        jobs,
        source: source.to_string(),
    }))
}

/// POST /api/v1/jobs/recommendations
///
/// Profile → enhanced search → scored, ranked listings plus insights. The
/// static listings stand in whenever the search yields nothing.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = resolve_profile(&state, &request).await?;
    let query = enhance_search(&profile, request.location.as_deref());

    let searched = match &state.job_search {
        Some(client) => match client.search(&query).await {
            Ok(jobs) if !jobs.is_empty() => Some(jobs),
            Ok(_) => {
                warn!("Job search returned no listings, using fallback jobs");
                None
            }
            Err(e) => {
                warn!("Job search failed, using fallback jobs: {e}");
                None
            }
        },
        None => None,
    };
    let (listings, source) = match searched {
        Some(jobs) => (jobs, SEARCH_SOURCE),
        None => (fallback_listings(request.location.as_deref()), FALLBACK_SOURCE),
    };

    let mut jobs = rank_listings(state.job_matcher.as_ref(), listings, &profile).await;
    if let Some(limit) = request.limit.filter(|l| *l > 0) {
        jobs.truncate(limit);
    }
    let insights = career_insights(&jobs, &profile);

    info!(
        "Recommended {} jobs ({source}) for domain '{}'",
        jobs.len(),
        profile.domain
    );

    Ok(Json(RecommendationsResponse {
        jobs,
        insights,
        query,
        source: source.to_string(),
        matcher: state.job_matcher.name().to_string(),
    }))
}

/// Scores every listing, labels urgency and sorts by descending score.
pub async fn rank_listings(
    matcher: &dyn JobMatcher,
    listings: Vec<JobListing>,
    profile: &MatchProfile,
) -> Vec<JobListing> {
    let mut ranked = Vec::with_capacity(listings.len());
    for mut job in listings {
        let score = score_or_fallback(matcher, &job, profile).await;
        job.match_score = Some(score);
        job.urgency = Some(Urgency::from_score(score));
        ranked.push(job);
    }
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

async fn resolve_profile(
    state: &AppState,
    request: &RecommendationsRequest,
) -> Result<MatchProfile, AppError> {
    if let Some(id) = request.candidate_id {
        let candidate: CandidateProfile = get_json(state.store.as_ref(), &candidate_key(&id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
        return Ok(MatchProfile::from(&candidate));
    }

    request.profile.clone().ok_or_else(|| {
        AppError::Validation("either candidate_id or profile is required".to_string())
    })
}

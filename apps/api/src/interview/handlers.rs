//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::analytics::{candidate_analytics, CandidateAnalytics};
use crate::interview::bank::{role_summaries, RoleSummary};
use crate::interview::evaluator::evaluate_answer;
use crate::interview::models::{AnswerEvaluation, Question};
use crate::interview::provider::{QuestionRequest, QuestionSet};
use crate::interview::session::{
    complete_session, create_session, delete_session, list_candidate_sessions, load_session,
    submit_answer, InterviewSession, SessionAnswer,
};
use crate::resume::profile::CandidateProfile;
use crate::state::AppState;
use crate::store::{candidate_key, get_json};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub role: String,
    pub candidate_id: Option<Uuid>,
    pub question_count: Option<usize>,
    pub resume_data: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    pub role: String,
    pub candidate_id: Option<Uuid>,
    pub question_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub question_index: usize,
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(flatten)]
    pub question: Question,
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleSummary>,
}

#[derive(Debug, Serialize)]
pub struct InterviewHistoryResponse {
    pub candidate_id: Uuid,
    pub interviews: Vec<InterviewSession>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: role_summaries(),
    })
}

/// POST /api/v1/questions
///
/// Questions from the configured provider, or the static bank when it fails.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<QuestionSet>, AppError> {
    let mut question_request = build_question_request(
        &state,
        &request.role,
        request.candidate_id,
        request.question_count,
    )
    .await?;
    question_request.resume_data = request.resume_data;

    let set = state.question_provider.generate(&question_request).await.map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Question generation failed: {e}"))
    })?;

    Ok(Json(set))
}

/// POST /api/v1/interviews
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(request): Json<StartInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewSession>), AppError> {
    let question_request = build_question_request(
        &state,
        &request.role,
        request.candidate_id,
        request.question_count,
    )
    .await?;

    let set = state.question_provider.generate(&question_request).await.map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Question generation failed: {e}"))
    })?;

    let session = create_session(
        state.store.as_ref(),
        request.candidate_id,
        &question_request.role,
        set,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<InterviewSession>, AppError> {
    Ok(Json(load_session(state.store.as_ref(), session_id).await?))
}

/// POST /api/v1/interviews/:id/answers
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SessionAnswer>, AppError> {
    let answer = submit_answer(
        state.store.as_ref(),
        session_id,
        request.question_index,
        &request.transcript,
    )
    .await?;
    Ok(Json(answer))
}

/// POST /api/v1/interviews/:id/complete
pub async fn handle_complete_interview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<InterviewSession>, AppError> {
    Ok(Json(complete_session(state.store.as_ref(), session_id).await?))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_delete_interview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    delete_session(state.store.as_ref(), session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/candidates/:id/interviews
///
/// Past and active interviews, oldest first.
pub async fn handle_candidate_interviews(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<InterviewHistoryResponse>, AppError> {
    let interviews = list_candidate_sessions(state.store.as_ref(), candidate_id).await?;
    Ok(Json(InterviewHistoryResponse {
        candidate_id,
        interviews,
    }))
}

/// GET /api/v1/candidates/:id/analytics
pub async fn handle_candidate_analytics(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<CandidateAnalytics>, AppError> {
    let sessions = list_candidate_sessions(state.store.as_ref(), candidate_id).await?;
    Ok(Json(candidate_analytics(candidate_id, &sessions)))
}

/// POST /api/v1/evaluate
///
/// Scores one answer without a session.
pub async fn handle_evaluate(
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<AnswerEvaluation>, AppError> {
    if request.question.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    Ok(Json(evaluate_answer(&request.question, &request.transcript)))
}

async fn build_question_request(
    state: &AppState,
    role: &str,
    candidate_id: Option<Uuid>,
    question_count: Option<usize>,
) -> Result<QuestionRequest, AppError> {
    if role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let mut request = QuestionRequest::new(role, question_count);
    if let Some(id) = candidate_id {
        let profile: CandidateProfile = get_json(state.store.as_ref(), &candidate_key(&id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
        request.candidate_profile = Some(profile);
    }
    Ok(request)
}

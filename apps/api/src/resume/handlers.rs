//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::extract::{extract_text, validate_upload, DocumentFormat};
use crate::resume::profile::{build_profile, CandidateProfile};
use crate::state::AppState;
use crate::store::{candidate_key, get_json, set_json};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub candidate_id: Option<Uuid>,
}

struct UploadedFile {
    file_name: String,
    content_type: Option<String>,
    data: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Multipart upload with a `file` part and an optional `candidate_id` part.
/// Unreadable documents still produce a (minimal) profile.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CandidateProfile>, AppError> {
    let mut upload: Option<UploadedFile> = None;
    let mut candidate_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                upload = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            "candidate_id" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid candidate_id: {e}")))?;
                let id = Uuid::parse_str(raw.trim())
                    .map_err(|_| AppError::Validation("candidate_id must be a UUID".to_string()))?;
                candidate_id = Some(id);
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("Missing 'file' part".to_string()))?;
    let format = validate_upload(
        &upload.file_name,
        upload.content_type.as_deref(),
        upload.data.len(),
    )
    .map_err(|e| AppError::Validation(e.to_string()))?;

    let candidate_id = candidate_id.unwrap_or_else(Uuid::new_v4);
    let text = extract_or_empty(format, upload.data.clone(), &upload.file_name).await;
    let profile = build_profile(candidate_id, &text);

    set_json(state.store.as_ref(), &candidate_key(&candidate_id), &profile).await?;

    if let Some(archive) = &state.archive {
        let content_type = upload
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream");
        if let Err(e) = archive
            .store(candidate_id, &upload.file_name, content_type, upload.data)
            .await
        {
            warn!("Resume archive failed for candidate {candidate_id}: {e}");
        }
    }

    info!(
        "Profile built for candidate {candidate_id}: ats={}, domain={}",
        profile.ats_score, profile.domain
    );

    Ok(Json(profile))
}

/// POST /api/v1/resumes/analyze
///
/// Same pipeline as the upload, for text the client already extracted.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    let candidate_id = request.candidate_id.unwrap_or_else(Uuid::new_v4);
    let profile = build_profile(candidate_id, &request.text);

    set_json(state.store.as_ref(), &candidate_key(&candidate_id), &profile).await?;

    Ok(Json(profile))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<CandidateProfile>, AppError> {
    let profile: CandidateProfile = get_json(state.store.as_ref(), &candidate_key(&candidate_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

    Ok(Json(profile))
}

/// Runs extraction on the blocking pool. Parse errors and parser panics both
/// degrade to empty text.
async fn extract_or_empty(format: DocumentFormat, data: Bytes, file_name: &str) -> String {
    match tokio::task::spawn_blocking(move || extract_text(format, &data)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("Text extraction failed for '{file_name}': {e}");
            String::new()
        }
        Err(e) => {
            warn!("Text extraction aborted for '{file_name}': {e}");
            String::new()
        }
    }
}

//! Interview session lifecycle on top of the key/value store.
//!
//! A session is created with its question list, accumulates one evaluated
//! answer per question (append-only), and is closed by `complete_session`,
//! which freezes the summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::evaluator::evaluate_answer;
use crate::interview::feedback::{summarize, InterviewSummary};
use crate::interview::models::{AnswerEvaluation, Question};
use crate::interview::provider::QuestionSet;
use crate::store::{candidate_sessions_key, get_json, session_key, set_json, KvStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAnswer {
    pub question_index: usize,
    pub question: Question,
    pub transcript: String,
    pub evaluation: AnswerEvaluation,
    pub answered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub session_id: Uuid,
    pub candidate_id: Option<Uuid>,
    pub role: String,
    pub questions: Vec<Question>,
    pub question_source: String,
    pub answers: Vec<SessionAnswer>,
    pub status: SessionStatus,
    pub summary: Option<InterviewSummary>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl InterviewSession {
    pub fn new(candidate_id: Option<Uuid>, role: &str, question_set: QuestionSet) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            candidate_id,
            role: role.to_string(),
            questions: question_set.questions,
            question_source: question_set.source,
            answers: Vec::new(),
            status: SessionStatus::Active,
            summary: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Scores `transcript` against question `question_index` and appends it.
    pub fn record_answer(
        &mut self,
        question_index: usize,
        transcript: &str,
    ) -> Result<&SessionAnswer, AppError> {
        if self.status == SessionStatus::Completed {
            return Err(AppError::Conflict(format!(
                "Interview {} is already completed",
                self.session_id
            )));
        }
        let question = self.questions.get(question_index).cloned().ok_or_else(|| {
            AppError::Validation(format!(
                "question_index {question_index} is out of range (0..{})",
                self.questions.len()
            ))
        })?;
        if self.answers.iter().any(|a| a.question_index == question_index) {
            return Err(AppError::Conflict(format!(
                "Question {question_index} has already been answered"
            )));
        }

        let evaluation = evaluate_answer(&question, transcript);
        self.answers.push(SessionAnswer {
            question_index,
            question,
            transcript: transcript.to_string(),
            evaluation,
            answered_at: Utc::now(),
        });

        Ok(&self.answers[self.answers.len() - 1])
    }

    /// Closes the session. Completing twice returns the frozen summary.
    pub fn complete(&mut self) -> InterviewSummary {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }
        let evaluations: Vec<AnswerEvaluation> =
            self.answers.iter().map(|a| a.evaluation.clone()).collect();
        let summary = summarize(&evaluations);

        self.status = SessionStatus::Completed;
        self.completed_at = Some(Utc::now());
        self.summary = Some(summary.clone());
        summary
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store-backed operations
// ────────────────────────────────────────────────────────────────────────────

pub async fn create_session(
    store: &dyn KvStore,
    candidate_id: Option<Uuid>,
    role: &str,
    question_set: QuestionSet,
) -> Result<InterviewSession, AppError> {
    let session = InterviewSession::new(candidate_id, role, question_set);
    set_json(store, &session_key(&session.session_id), &session).await?;
    if let Some(candidate_id) = candidate_id {
        let mut index = load_session_index(store, candidate_id).await?;
        index.push(session.session_id);
        set_json(store, &candidate_sessions_key(&candidate_id), &index).await?;
    }
    info!(
        "Created interview {} for role '{}' with {} questions ({})",
        session.session_id,
        session.role,
        session.questions.len(),
        session.question_source
    );
    Ok(session)
}

pub async fn load_session(
    store: &dyn KvStore,
    session_id: Uuid,
) -> Result<InterviewSession, AppError> {
    get_json(store, &session_key(&session_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {session_id} not found")))
}

pub async fn submit_answer(
    store: &dyn KvStore,
    session_id: Uuid,
    question_index: usize,
    transcript: &str,
) -> Result<SessionAnswer, AppError> {
    let mut session = load_session(store, session_id).await?;
    let answer = session.record_answer(question_index, transcript)?.clone();
    set_json(store, &session_key(&session_id), &session).await?;
    Ok(answer)
}

pub async fn complete_session(
    store: &dyn KvStore,
    session_id: Uuid,
) -> Result<InterviewSession, AppError> {
    let mut session = load_session(store, session_id).await?;
    let summary = session.complete();
    set_json(store, &session_key(&session_id), &session).await?;
    info!(
        "Completed interview {session_id}: overall={} over {} answers",
        summary.overall_score, summary.answered
    );
    Ok(session)
}

pub async fn delete_session(store: &dyn KvStore, session_id: Uuid) -> Result<(), AppError> {
    let session = load_session(store, session_id).await?;
    store.delete(&session_key(&session_id)).await?;

    if let Some(candidate_id) = session.candidate_id {
        let mut index = load_session_index(store, candidate_id).await?;
        index.retain(|id| *id != session_id);
        let key = candidate_sessions_key(&candidate_id);
        if index.is_empty() {
            store.delete(&key).await?;
        } else {
            set_json(store, &key, &index).await?;
        }
    }
    Ok(())
}

async fn load_session_index(store: &dyn KvStore, candidate_id: Uuid) -> Result<Vec<Uuid>, AppError> {
    Ok(get_json(store, &candidate_sessions_key(&candidate_id))
        .await?
        .unwrap_or_default())
}

/// A candidate's interviews, oldest first. Indexed sessions that no longer
/// exist (expired in Redis) are skipped.
pub async fn list_candidate_sessions(
    store: &dyn KvStore,
    candidate_id: Uuid,
) -> Result<Vec<InterviewSession>, AppError> {
    let mut sessions = Vec::new();
    for session_id in load_session_index(store, candidate_id).await? {
        match get_json::<InterviewSession>(store, &session_key(&session_id)).await? {
            Some(session) => sessions.push(session),
            None => debug!("Session {session_id} indexed for {candidate_id} is gone"),
        }
    }
    sessions.sort_by_key(|s| s.created_at);
    Ok(sessions)
}

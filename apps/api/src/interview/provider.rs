//! Question providers: pluggable, trait-based question generation.
//!
//! `StaticQuestionBank` always works. `HttpQuestionProvider` and
//! `LlmQuestionProvider` call out and may fail; `FallbackQuestionProvider`
//! wraps one of them and substitutes the static bank on any failure.
//!
//! `AppState` holds an `Arc<dyn QuestionProvider>`, chosen at startup via config.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::interview::bank::bank_questions;
use crate::interview::models::Question;
use crate::interview::prompts::{QUESTION_PERSONA, QUESTION_PROMPT_TEMPLATE};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::resume::domain::GENERAL_DOMAIN;
use crate::resume::profile::CandidateProfile;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 10;

pub const STATIC_SOURCE: &str = "static-bank";

// ────────────────────────────────────────────────────────────────────────────
// Request / result models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct QuestionRequest {
    pub role: String,
    pub candidate_profile: Option<CandidateProfile>,
    pub resume_data: Option<Value>,
    pub question_count: usize,
}

impl QuestionRequest {
    /// Clamps the requested count to `1..=MAX_QUESTION_COUNT`.
    pub fn new(role: &str, question_count: Option<usize>) -> Self {
        Self {
            role: role.trim().to_string(),
            candidate_profile: None,
            resume_data: None,
            question_count: question_count
                .unwrap_or(DEFAULT_QUESTION_COUNT)
                .clamp(1, MAX_QUESTION_COUNT),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub source: String,
    pub confidence: f64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Question service returned status {0}")]
    Status(u16),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Provider returned no questions")]
    Empty,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait QuestionProvider: Send + Sync {
    async fn generate(&self, request: &QuestionRequest) -> Result<QuestionSet, ProviderError>;

    /// Short label reported by `/health`.
    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// StaticQuestionBank
// ────────────────────────────────────────────────────────────────────────────

pub struct StaticQuestionBank;

#[async_trait]
impl QuestionProvider for StaticQuestionBank {
    async fn generate(&self, request: &QuestionRequest) -> Result<QuestionSet, ProviderError> {
        Ok(static_question_set(request))
    }

    fn name(&self) -> &'static str {
        STATIC_SOURCE
    }
}

fn static_question_set(request: &QuestionRequest) -> QuestionSet {
    QuestionSet {
        questions: bank_questions(&request.role, request.question_count),
        source: STATIC_SOURCE.to_string(),
        confidence: 1.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HttpQuestionProvider: external question-generation service
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionServiceRequest<'a> {
    role: &'a str,
    candidate_profile: Option<&'a CandidateProfile>,
    resume_data: Option<&'a Value>,
    question_count: usize,
}

#[derive(Deserialize)]
struct QuestionServiceResponse {
    questions: Vec<Question>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
}

pub struct HttpQuestionProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpQuestionProvider {
    pub fn new(url: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            url,
        })
    }
}

#[async_trait]
impl QuestionProvider for HttpQuestionProvider {
    async fn generate(&self, request: &QuestionRequest) -> Result<QuestionSet, ProviderError> {
        let body = QuestionServiceRequest {
            role: &request.role,
            candidate_profile: request.candidate_profile.as_ref(),
            resume_data: request.resume_data.as_ref(),
            question_count: request.question_count,
        };

        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let parsed: QuestionServiceResponse = response.json().await?;
        Ok(QuestionSet {
            questions: parsed.questions,
            source: parsed.source.unwrap_or_else(|| "question-service".to_string()),
            confidence: parsed.confidence.unwrap_or(0.8).clamp(0.0, 1.0),
        })
    }

    fn name(&self) -> &'static str {
        "question-service"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmQuestionProvider: questions generated by Claude
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmQuestionProvider(pub LlmClient);

#[async_trait]
impl QuestionProvider for LlmQuestionProvider {
    async fn generate(&self, request: &QuestionRequest) -> Result<QuestionSet, ProviderError> {
        let prompt = build_question_prompt(request);
        let system = format!("{QUESTION_PERSONA} {JSON_ONLY_SYSTEM}");
        let questions: Vec<Question> = self.0.call_json(&prompt, &system).await?;

        Ok(QuestionSet {
            questions,
            source: "llm".to_string(),
            confidence: 0.85,
        })
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

pub fn build_question_prompt(request: &QuestionRequest) -> String {
    let (domain, experience_years, skills) = match &request.candidate_profile {
        Some(profile) => {
            let skills = profile.all_skills();
            (
                profile.domain.clone(),
                profile.experience_years,
                if skills.is_empty() {
                    "none listed".to_string()
                } else {
                    skills.join(", ")
                },
            )
        }
        None => (GENERAL_DOMAIN.to_string(), 0.0, "unknown".to_string()),
    };

    QUESTION_PROMPT_TEMPLATE
        .replace("{count}", &request.question_count.to_string())
        .replace("{role}", &request.role)
        .replace("{domain}", &domain)
        .replace("{experience_years}", &experience_years.to_string())
        .replace("{skills}", &skills)
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackQuestionProvider
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary` once; any error or an empty list yields the static bank.
/// The result never exceeds the requested question count.
pub struct FallbackQuestionProvider {
    primary: Option<Arc<dyn QuestionProvider>>,
}

impl FallbackQuestionProvider {
    pub fn new(primary: Option<Arc<dyn QuestionProvider>>) -> Self {
        Self { primary }
    }

    pub fn primary_name(&self) -> &'static str {
        self.primary
            .as_ref()
            .map(|p| p.name())
            .unwrap_or(STATIC_SOURCE)
    }
}

#[async_trait]
impl QuestionProvider for FallbackQuestionProvider {
    async fn generate(&self, request: &QuestionRequest) -> Result<QuestionSet, ProviderError> {
        let Some(primary) = &self.primary else {
            return Ok(static_question_set(request));
        };

        match primary.generate(request).await {
            Ok(mut set) if !set.questions.is_empty() => {
                set.questions.truncate(request.question_count);
                info!(
                    "{} provided {} questions for role '{}'",
                    primary.name(),
                    set.questions.len(),
                    request.role
                );
                Ok(set)
            }
            Ok(_) => {
                warn!(
                    "{} returned no questions for role '{}'; using static bank",
                    primary.name(),
                    request.role
                );
                Ok(static_question_set(request))
            }
            Err(e) => {
                warn!(
                    "{} failed for role '{}': {e}; using static bank",
                    primary.name(),
                    request.role
                );
                Ok(static_question_set(request))
            }
        }
    }

    fn name(&self) -> &'static str {
        self.primary_name()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

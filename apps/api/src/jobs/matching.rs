//! Job Match Scorer: pluggable, trait-based scorer for a listing against a
//! candidate's match profile.
//!
//! `AppState` holds an `Arc<dyn JobMatcher>`. Callers go through
//! [`score_or_fallback`], which never surfaces a scoring failure.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::jobs::domains::mentions_domain;
use crate::jobs::listing::JobListing;
use crate::resume::profile::CandidateProfile;

pub const BASE_MATCH_SCORE: i64 = 75;
pub const MIN_MATCH_SCORE: u32 = 70;
pub const MAX_MATCH_SCORE: u32 = 98;
const DOMAIN_IN_TITLE: i64 = 10;
const DOMAIN_IN_DESCRIPTION: i64 = 5;
const POINTS_PER_SKILL: i64 = 3;
const MAX_SKILL_POINTS: i64 = 15;
const SENIORITY_BONUS: i64 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// The slice of a candidate profile the matcher looks at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub experience_years: f64,
}

impl From<&CandidateProfile> for MatchProfile {
    fn from(profile: &CandidateProfile) -> Self {
        Self {
            skills: profile.all_skills(),
            domain: profile.domain.clone(),
            experience_years: profile.experience_years,
        }
    }
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid experience years: {0}")]
    InvalidExperience(f64),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait JobMatcher: Send + Sync {
    async fn score(&self, job: &JobListing, profile: &MatchProfile) -> Result<u32, MatchError>;

    fn name(&self) -> &'static str;
}

/// Deterministic keyword heuristic.
pub struct KeywordJobMatcher;

#[async_trait]
impl JobMatcher for KeywordJobMatcher {
    async fn score(&self, job: &JobListing, profile: &MatchProfile) -> Result<u32, MatchError> {
        keyword_match_score(job, profile)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Candidate skills that some requirement contains (case-insensitive).
pub fn matched_skill_count(skills: &[String], requirements: &[String]) -> usize {
    let requirements: Vec<String> = requirements.iter().map(|r| r.to_lowercase()).collect();
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|skill| requirements.iter().any(|req| req.contains(skill.as_str())))
        .count()
}

fn seniority_aligned(lower_title: &str, years: f64) -> bool {
    let senior = lower_title.contains("senior") || lower_title.contains("sr.");
    let junior = lower_title.contains("junior") || lower_title.contains("jr.");
    if senior {
        years >= 5.0
    } else if junior {
        years <= 2.0
    } else {
        (2.0..=5.0).contains(&years)
    }
}

pub fn keyword_match_score(job: &JobListing, profile: &MatchProfile) -> Result<u32, MatchError> {
    let years = profile.experience_years;
    if !years.is_finite() || years < 0.0 {
        return Err(MatchError::InvalidExperience(years));
    }

    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();
    let mut score = BASE_MATCH_SCORE;

    if !profile.domain.trim().is_empty() {
        if mentions_domain(&profile.domain, &title) {
            score += DOMAIN_IN_TITLE;
        } else if mentions_domain(&profile.domain, &description) {
            score += DOMAIN_IN_DESCRIPTION;
        }
    }

    let matches = matched_skill_count(&profile.skills, &job.requirements) as i64;
    score += (matches * POINTS_PER_SKILL).min(MAX_SKILL_POINTS);

    if seniority_aligned(&title, years) {
        score += SENIORITY_BONUS;
    }

    Ok(score.clamp(MIN_MATCH_SCORE as i64, MAX_MATCH_SCORE as i64) as u32)
}

/// Scores through `matcher`; a failure yields a random score in [70, 95).
pub async fn score_or_fallback(
    matcher: &dyn JobMatcher,
    job: &JobListing,
    profile: &MatchProfile,
) -> u32 {
    match matcher.score(job, profile).await {
        Ok(score) => score,
        Err(e) => {
            warn!("Match scoring failed for job {} ({}): {e}", job.id, matcher.name());
            rand::rng().random_range(MIN_MATCH_SCORE..95)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::profile::build_profile;
    use uuid::Uuid;

    fn listing(title: &str, description: &str, requirements: &[&str]) -> JobListing {
        JobListing {
            id: "test-1".to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary: "Competitive Salary".to_string(),
            job_type: "Full-time".to_string(),
            description: description.to_string(),
            requirements: requirements.iter().map(|s| s.to_string()).collect(),
            posted_date: "2026-01-01".to_string(),
            url: "#".to_string(),
            source: "test".to_string(),
            applicant_count: None,
            match_score: None,
            urgency: None,
        }
    }

    fn profile(skills: &[&str], domain: &str, years: f64) -> MatchProfile {
        MatchProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            domain: domain.to_string(),
            experience_years: years,
        }
    }

    struct FailingMatcher;

    #[async_trait]
    impl JobMatcher for FailingMatcher {
        async fn score(&self, _job: &JobListing, profile: &MatchProfile) -> Result<u32, MatchError> {
            Err(MatchError::InvalidExperience(profile.experience_years))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_overlapping_skills_score_higher() {
        let job = listing("Platform Engineer", "Run our clusters", &["AWS", "Kubernetes"]);
        let strong = keyword_match_score(&job, &profile(&["AWS", "Kubernetes", "Docker"], "General", 0.0)).unwrap();
        let weak = keyword_match_score(&job, &profile(&["PHP"], "General", 0.0)).unwrap();
        assert!(strong > weak, "{strong} should beat {weak}");
    }

    #[test]
    fn test_exact_requirements_never_below_zero_overlap() {
        let reqs = ["Python", "Django", "PostgreSQL", "Docker", "Redis", "Celery"];
        let job = listing("Developer", "Build things", &reqs);
        let exact = keyword_match_score(&job, &profile(&reqs, "General", 3.0)).unwrap();
        let none = keyword_match_score(&job, &profile(&["Cobol"], "General", 3.0)).unwrap();
        assert!(exact >= none);
    }

    #[test]
    fn test_base_score_without_signals() {
        let job = listing("Senior Accountant", "Ledgers", &[]);
        let score = keyword_match_score(&job, &profile(&[], "", 0.0)).unwrap();
        assert_eq!(score, 75);
    }

    #[test]
    fn test_domain_title_beats_description() {
        let p = profile(&[], "Cloud & DevOps", 0.0);
        let in_title = keyword_match_score(&listing("Senior DevOps Engineer", "", &[]), &p).unwrap();
        let in_description =
            keyword_match_score(&listing("Senior Engineer", "Join our devops team", &[]), &p).unwrap();
        assert_eq!(in_title, 85);
        assert_eq!(in_description, 80);
    }

    #[test]
    fn test_skill_points_capped() {
        let reqs = ["aws", "docker", "kubernetes", "terraform", "jenkins", "ansible", "helm"];
        let job = listing("Senior Accountant", "", &reqs);
        let score = keyword_match_score(&job, &profile(&reqs, "", 0.0)).unwrap();
        assert_eq!(score, 75 + 15);
    }

    #[test]
    fn test_seniority_alignment() {
        let p = profile(&[], "", 6.0);
        assert_eq!(keyword_match_score(&listing("Senior Accountant", "", &[]), &p).unwrap(), 80);
        let p = profile(&[], "", 1.0);
        assert_eq!(keyword_match_score(&listing("Junior Accountant", "", &[]), &p).unwrap(), 80);
        let p = profile(&[], "", 3.0);
        assert_eq!(keyword_match_score(&listing("Accountant", "", &[]), &p).unwrap(), 80);
    }

    #[test]
    fn test_score_clamped_to_max() {
        let reqs = ["aws", "docker", "kubernetes", "terraform", "jenkins"];
        let job = listing("Senior DevOps Engineer", "", &reqs);
        let score = keyword_match_score(&job, &profile(&reqs, "Cloud & DevOps", 8.0)).unwrap();
        assert_eq!(score, MAX_MATCH_SCORE);
    }

    #[test]
    fn test_invalid_experience_is_an_error() {
        let job = listing("Developer", "", &[]);
        assert!(keyword_match_score(&job, &profile(&[], "", f64::NAN)).is_err());
        assert!(keyword_match_score(&job, &profile(&[], "", -1.0)).is_err());
    }

    #[tokio::test]
    async fn test_failing_matcher_falls_back_to_random_band() {
        let job = listing("Developer", "", &[]);
        for _ in 0..50 {
            let score = score_or_fallback(&FailingMatcher, &job, &profile(&[], "", 1.0)).await;
            assert!((70..95).contains(&score));
        }
    }

    #[test]
    fn test_skill_shared_by_two_categories_counts_once() {
        let candidate = build_profile(Uuid::new_v4(), "Shipped mobile apps written in swift.");
        let job = listing("Accountant", "", &["Swift"]);
        let score = keyword_match_score(&job, &MatchProfile::from(&candidate)).unwrap();
        assert_eq!(score, 78);
    }

    #[tokio::test]
    async fn test_keyword_matcher_through_trait() {
        let job = listing("Developer", "", &["AWS"]);
        let score = score_or_fallback(&KeywordJobMatcher, &job, &profile(&["aws"], "", 3.0)).await;
        assert_eq!(score, 75 + 3 + 5);
    }
}

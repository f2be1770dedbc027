use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resume::ats::{ats_breakdown, AtsBreakdown};
use crate::resume::domain::classify_domain;
use crate::resume::features::{extract_features, ContactInfo};
use crate::resume::skills::{SkillMap, SKILL_CATEGORIES};

/// Candidate profile built once per resume upload. A later upload for the same
/// candidate replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_id: Uuid,
    pub skills: SkillMap,
    pub experience_years: f64,
    pub education: Vec<String>,
    pub contact: ContactInfo,
    pub ats_score: u32,
    pub ats_breakdown: AtsBreakdown,
    pub domain: String,
    pub word_count: usize,
    pub created_at: DateTime<Utc>,
}

impl CandidateProfile {
    /// Every matched skill once, in `SKILL_CATEGORIES` declaration order.
    /// Keywords listed under two categories (`swift`, `kotlin`) appear once.
    pub fn all_skills(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        SKILL_CATEGORIES
            .iter()
            .filter_map(|category| self.skills.get(category.name))
            .flatten()
            .filter(|skill| seen.insert(*skill))
            .cloned()
            .collect()
    }
}

/// Runs the full pipeline: features → ATS score + domain → profile.
pub fn build_profile(candidate_id: Uuid, text: &str) -> CandidateProfile {
    let features = extract_features(text);
    let ats_breakdown = ats_breakdown(text, &features);
    let domain = classify_domain(&features.skills);

    CandidateProfile {
        candidate_id,
        ats_score: ats_breakdown.total,
        ats_breakdown,
        domain,
        word_count: text.split_whitespace().count(),
        skills: features.skills,
        experience_years: features.experience_years,
        education: features.education,
        contact: features.contact,
        created_at: Utc::now(),
    }
}

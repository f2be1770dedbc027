//! ATS Scorer: a fixed weighted sum over resume signals, capped at 80.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::features::ResumeFeatures;
use crate::resume::skills::{non_empty_categories, total_skill_count};

pub const BASE_SCORE: f64 = 20.0;
pub const MAX_ATS_SCORE: u32 = 80;

const ACTION_WORDS: &[&str] = &[
    "achieved", "improved", "increased", "decreased", "developed", "created", "designed",
    "implemented", "managed", "led", "coordinated", "optimized", "streamlined", "delivered",
    "built", "established", "worked", "completed", "participated", "contributed",
];

const SECTION_WORDS: &[&str] = &["experience", "education", "skills", "projects", "certifications"];

static QUANTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+%|\$\d+|\d+\s*(?:million|thousand|k\b)|\d+x\s*(?:faster|improvement)|\d+\s*projects?",
    )
    .expect("static quantifier pattern")
});

/// Per-signal contributions. `total` is the capped, rounded score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub base: f64,
    pub skills: f64,
    pub skill_diversity: f64,
    pub action_words: f64,
    pub quantifiers: f64,
    pub sections: f64,
    pub contact: f64,
    pub length: f64,
    pub fresher: f64,
    pub total: u32,
}

pub fn calculate_ats_score(text: &str, features: &ResumeFeatures) -> u32 {
    ats_breakdown(text, features).total
}

pub fn ats_breakdown(text: &str, features: &ResumeFeatures) -> AtsBreakdown {
    let lower = text.to_lowercase();

    let skills = (total_skill_count(&features.skills) as f64 * 1.8).min(20.0);
    let skill_diversity = (non_empty_categories(&features.skills) as f64 * 2.0).min(8.0);

    let action_hits = ACTION_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let action_words = (action_hits as f64 * 2.0).min(20.0);

    let quantifiers = (QUANTIFIER.find_iter(text).count() as f64 * 3.0).min(12.0);

    let section_hits = SECTION_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let sections = (section_hits as f64 * 2.5).min(12.0);

    let mut contact = 0.0;
    if features.contact.email.is_some() {
        contact += 4.0;
    }
    if features.contact.phone.is_some() {
        contact += 2.0;
    }
    if lower.contains("linkedin") || lower.contains("github") {
        contact += 2.0;
    }

    let words = text.split_whitespace().count();
    let mut length = 0.0;
    if words > 150 {
        length += 3.0;
    }
    if words > 300 {
        length += 4.0;
    }
    if words > 500 {
        length += 3.0;
    }

    let fresher = if lower.contains("graduate") || lower.contains("fresher") {
        5.0
    } else {
        0.0
    };

    let raw = BASE_SCORE
        + skills
        + skill_diversity
        + action_words
        + quantifiers
        + sections
        + contact
        + length
        + fresher;

    AtsBreakdown {
        base: BASE_SCORE,
        skills,
        skill_diversity,
        action_words,
        quantifiers,
        sections,
        contact,
        length,
        fresher,
        total: (raw.round() as u32).min(MAX_ATS_SCORE),
    }
}

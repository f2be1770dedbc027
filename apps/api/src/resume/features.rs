//! Resume Feature Extractor: skills, explicit experience, degrees and contact fields.
//!
//! Experience is taken only from explicit statements ("5 years of experience",
//! "3+ years", "6 months internship"). Date ranges and job titles are never used
//! to infer tenure; a resume without an explicit statement gets 0 years.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::skills::{empty_skill_map, extract_skills, SkillMap};

/// Texts shorter than this (after trimming) are treated as failed extractions.
pub const MIN_TEXT_LEN: usize = 20;

const MAX_EXPLICIT_YEARS: f64 = 20.0;
const MAX_INTERNSHIP_YEARS: f64 = 2.0;
const DEFAULT_INTERNSHIP_MONTHS: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// The four-part feature bundle produced from one resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeFeatures {
    pub skills: SkillMap,
    pub experience_years: f64,
    pub education: Vec<String>,
    pub contact: ContactInfo,
}

impl ResumeFeatures {
    pub fn empty() -> Self {
        Self {
            skills: empty_skill_map(),
            experience_years: 0.0,
            education: Vec::new(),
            contact: ContactInfo::default(),
        }
    }
}

static EXPLICIT_YEARS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(\d{1,2})\+?[\s-]*(?:years?|yrs?)\s*(?:of\s*)?(?:(?:work|professional)\s*)?(?:experience|exp)\b",
        r"(?i)\b(?:work|professional)\s*experience[:\s]*(\d{1,2})\+?[\s-]*(?:years?|yrs?)\b",
        r"(?i)\b(\d{1,2})\+\s*(?:years?|yrs?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static experience pattern"))
    .collect()
});

static INTERNSHIP: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bintern(?:ship)?\s+at\s+[\w ]+",
        r"(?i)\b(\d+)\s*months?\s*intern(?:ship)?\b",
        r"(?i)\bintern(?:ship)?\s*(?:for|duration|period)[:\s]*(\d+)\s*months?",
        r"(?i)\bsummer\s*intern(?:ship)?\b",
        r"(?i)\bintern(?:ship)?\s*(?:role|position)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static internship pattern"))
    .collect()
});

static MONTHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*months?").expect("static months pattern"));

/// Degree patterns. Two-letter abbreviations (`BE`, `BA`, `ME`, `MA`) are matched
/// case-sensitively so the English words "be" and "me" never count as degrees.
static DEGREES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bb\.?tech\b",
        r"\bB\.?E\b",
        r"(?i)\bb\.?sc\b",
        r"(?i)\bb\.?com\b",
        r"\bB\.?A\b",
        r"(?i)\bm\.?tech\b",
        r"\bM\.?E\b",
        r"(?i)\bm\.?sc\b",
        r"(?i)\bm\.?com\b",
        r"\bM\.?A\b",
        r"(?i)\bmba\b",
        r"(?i)\bph\.?d\b",
        r"(?i)\bbachelor\s+of\s+technology\b",
        r"(?i)\bbachelor\s+of\s+engineering\b",
        r"(?i)\bmaster\s+of\s+technology\b",
        r"(?i)\bmaster\s+of\s+engineering\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static degree pattern"))
    .collect()
});

pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("static email pattern")
});

pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
        .expect("static phone pattern")
});

static LINKEDIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").expect("static linkedin pattern"));

static GITHUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/[\w-]+").expect("static github pattern"));

/// Extracts the full feature bundle. Empty or near-empty input yields
/// `ResumeFeatures::empty()` instead of an error.
pub fn extract_features(text: &str) -> ResumeFeatures {
    if text.trim().len() < MIN_TEXT_LEN {
        return ResumeFeatures::empty();
    }

    ResumeFeatures {
        skills: extract_skills(&text.to_lowercase()),
        experience_years: extract_experience_years(text),
        education: extract_education(text),
        contact: extract_contact(text),
    }
}

pub fn extract_experience_years(text: &str) -> f64 {
    let explicit = EXPLICIT_YEARS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    if explicit > 0 {
        return (explicit as f64).min(MAX_EXPLICIT_YEARS);
    }

    let mut internship_months = 0u32;
    for re in INTERNSHIP.iter() {
        for m in re.find_iter(text) {
            let months = MONTHS
                .captures(m.as_str())
                .and_then(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
                .unwrap_or(DEFAULT_INTERNSHIP_MONTHS);
            internship_months = internship_months.saturating_add(months);
        }
    }

    (internship_months as f64 / 12.0).min(MAX_INTERNSHIP_YEARS)
}

pub fn extract_education(text: &str) -> Vec<String> {
    let mut degrees: Vec<String> = Vec::new();
    for re in DEGREES.iter() {
        for m in re.find_iter(text) {
            let degree = m.as_str().trim().to_uppercase();
            if !degrees.contains(&degree) {
                degrees.push(degree);
            }
        }
    }
    degrees
}

pub fn extract_contact(text: &str) -> ContactInfo {
    let first = |re: &Regex| re.find(text).map(|m| m.as_str().to_string());
    ContactInfo {
        email: first(&EMAIL),
        phone: first(&PHONE),
        linkedin: first(&LINKEDIN),
        github: first(&GITHUB),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_years_with_preposition() {
        let years = extract_experience_years("5 years of experience in JavaScript");
        assert_eq!(years, 5.0);
    }

    #[test]
    fn test_explicit_years_without_trailing_word() {
        assert_eq!(extract_experience_years("Summary: 5 years experience."), 5.0);
        assert_eq!(extract_experience_years("4 yrs exp"), 4.0);
    }

    #[test]
    fn test_plus_years_counts() {
        assert_eq!(extract_experience_years("Backend engineer, 7+ years"), 7.0);
    }

    #[test]
    fn test_largest_explicit_value_wins() {
        let text = "2 years experience with Go. Professional experience: 6 years";
        assert_eq!(extract_experience_years(text), 6.0);
    }

    #[test]
    fn test_explicit_years_capped_at_twenty() {
        assert_eq!(extract_experience_years("35 years of experience"), 20.0);
    }

    #[test]
    fn test_date_ranges_are_not_inferred() {
        let text = "Software Engineer, Acme Corp, 2015 - 2023. Senior Developer.";
        assert_eq!(extract_experience_years(text), 0.0);
    }

    #[test]
    fn test_internship_months_converted_to_years() {
        let years = extract_experience_years("Completed a 6 months internship building dashboards");
        assert!((years - 0.5).abs() < 1e-9, "got {years}");
    }

    #[test]
    fn test_unspecified_internship_defaults_to_three_months() {
        let years = extract_experience_years("Summer internship, data team");
        assert!((years - 0.25).abs() < 1e-9, "got {years}");
    }

    #[test]
    fn test_internship_capped_at_two_years() {
        let text = "30 months internship. internship for 30 months. summer internship";
        assert_eq!(extract_experience_years(text), 2.0);
    }

    #[test]
    fn test_internal_is_not_an_internship() {
        assert_eq!(extract_experience_years("Built internal tooling for the company"), 0.0);
    }

    #[test]
    fn test_education_deduplicated_and_uppercased() {
        let degrees = extract_education("B.Tech in CS, b.tech honours, MBA from IIM, PhD");
        assert_eq!(degrees, vec!["B.TECH", "MBA", "PHD"]);
    }

    #[test]
    fn test_common_words_are_not_degrees() {
        assert!(extract_education("I want to be a developer, tell me more").is_empty());
    }

    #[test]
    fn test_contact_fields() {
        let contact = extract_contact(
            "Reach me: jane.doe@example.com, (555) 123-4567, linkedin.com/in/jane-doe, github.com/janedoe",
        );
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jane-doe"));
        assert_eq!(contact.github.as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn test_contact_fields_optional() {
        assert_eq!(extract_contact("no contact details at all"), ContactInfo::default());
    }

    #[test]
    fn test_short_text_yields_empty_bundle() {
        assert_eq!(extract_features(""), ResumeFeatures::empty());
        assert_eq!(extract_features("   python   "), ResumeFeatures::empty());
    }

    #[test]
    fn test_scenario_resume_line() {
        let features =
            extract_features("5 years of experience in JavaScript, React, AWS. email: a@b.com");
        assert_eq!(features.experience_years, 5.0);
        assert!(features.skills["Programming Languages"].contains(&"javascript".to_string()));
        assert!(features.skills["Web Technologies"].contains(&"react".to_string()));
        assert!(features.skills["Cloud & DevOps"].contains(&"aws".to_string()));
        assert_eq!(features.contact.email.as_deref(), Some("a@b.com"));
    }
}

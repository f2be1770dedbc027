use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Skills looked for in listing descriptions, in priority order.
const COMMON_SKILLS: &[&str] = &[
    "JavaScript", "Python", "Java", "React", "Node.js", "AWS", "SQL", "Docker", "Kubernetes",
    "TypeScript", "Angular", "Vue", "Git", "Azure", "GCP", "PHP", "C#", ".NET", "Ruby", "Go",
    "HTML", "CSS", "SASS", "LESS", "REST API", "GraphQL", "MongoDB", "PostgreSQL", "MySQL",
    "Oracle", "NoSQL", "Redux", "Express", "Django", "Flask", "Spring", "Laravel", "Agile",
    "Scrum", "Jira", "CI/CD", "Jenkins", "GitHub Actions", "DevOps", "Cloud", "Microservices",
    "Serverless",
];

const MAX_REQUIREMENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    /// > 90 high, > 80 medium, otherwise low.
    pub fn from_score(score: u32) -> Self {
        if score > 90 {
            Self::High
        } else if score > 80 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One external job posting. Ephemeral: listings are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: String,
    pub url: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
}

/// First five common skills mentioned (case-insensitive substring) in `description`.
pub fn extract_requirements(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    COMMON_SKILLS
        .iter()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .take(MAX_REQUIREMENTS)
        .map(|s| s.to_string())
        .collect()
}

fn text_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match raw.get(*k) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Maps one raw search-API result onto a listing, filling defaults for
/// anything missing. Returns `None` for values that are not JSON objects.
pub fn format_listing(raw: &Value, index: usize, source: &str, today: &str) -> Option<JobListing> {
    if !raw.is_object() {
        return None;
    }

    let description = text_field(raw, &["snippet", "description"])
        .unwrap_or_else(|| "No description provided".to_string());
    let id = text_field(raw, &["id"]).unwrap_or_else(|| index.to_string());

    Some(JobListing {
        id: format!("{source}-{id}"),
        title: text_field(raw, &["title"]).unwrap_or_else(|| "Untitled Position".to_string()),
        company: text_field(raw, &["company"]).unwrap_or_else(|| "Unknown Company".to_string()),
        location: text_field(raw, &["location"]).unwrap_or_else(|| "Remote".to_string()),
        salary: text_field(raw, &["salary"]).unwrap_or_else(|| "Competitive Salary".to_string()),
        job_type: text_field(raw, &["type"]).unwrap_or_else(|| "Full-time".to_string()),
        requirements: extract_requirements(&description),
        description,
        posted_date: text_field(raw, &["updated", "postedDate"])
            .map(|d| d.chars().take(10).collect())
            .unwrap_or_else(|| today.to_string()),
        url: text_field(raw, &["link", "url"]).unwrap_or_else(|| "#".to_string()),
        source: source.to_string(),
        applicant_count: raw
            .get("applicants")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok()),
        match_score: None,
        urgency: None,
    })
}

//! Career insights derived from a set of listings and a match profile.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::jobs::domains::vocabulary;
use crate::jobs::listing::JobListing;
use crate::jobs::matching::MatchProfile;

pub const DEFAULT_SALARY_RANGE: &str = "$90,000 - $120,000";
const INSIGHTS_CONFIDENCE: f64 = 0.94;
const MAX_ITEMS: usize = 5;

static SALARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$(\d{2,3}(,\d{3})*)|\d{2,3}k").expect("static regex")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerInsights {
    pub market_trends: String,
    pub salary_insights: String,
    pub skill_gaps: Vec<String>,
    pub career_path: String,
    pub top_skills: Vec<String>,
    pub confidence: f64,
}

pub fn career_insights(jobs: &[JobListing], profile: &MatchProfile) -> CareerInsights {
    let domain = if profile.domain.trim().is_empty() {
        "software"
    } else {
        profile.domain.as_str()
    };

    CareerInsights {
        market_trends: market_trend(domain, jobs.len()),
        salary_insights: salary_range(jobs),
        skill_gaps: skill_gaps(jobs, &profile.skills),
        career_path: vocabulary(&profile.domain).career_path.to_string(),
        top_skills: top_skills(jobs),
        confidence: INSIGHTS_CONFIDENCE,
    }
}

pub fn market_trend(domain: &str, job_count: usize) -> String {
    match job_count {
        n if n > 50 => {
            format!("Very high demand for {domain} professionals with numerous opportunities")
        }
        n if n > 25 => format!("Strong market for {domain} roles with growing demand"),
        n if n > 10 => format!("Moderate demand for {domain} skills in current job market"),
        _ => format!("Limited opportunities for {domain} positions, consider expanding search"),
    }
}

/// Most frequent requirements across listings; ties keep first appearance.
pub fn top_skills(jobs: &[JobListing]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for requirement in jobs.iter().flat_map(|j| &j.requirements) {
        match counts.iter_mut().find(|(name, _)| name == requirement) {
            Some((_, n)) => *n += 1,
            None => counts.push((requirement.clone(), 1)),
        }
    }
    // stable sort keeps first-appearance order within a count
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(MAX_ITEMS).map(|(name, _)| name).collect()
}

fn parse_salary(token: &str) -> Option<u64> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    let value: u64 = digits.parse().ok()?;
    if token.to_lowercase().ends_with('k') {
        Some(value * 1000)
    } else {
        Some(value)
    }
}

fn with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$min - $max` over every salary figure in the listings, or the default
/// range when fewer than two figures parse.
pub fn salary_range(jobs: &[JobListing]) -> String {
    let values: Vec<u64> = jobs
        .iter()
        .flat_map(|j| SALARY.find_iter(&j.salary).filter_map(|m| parse_salary(m.as_str())))
        .collect();

    match (values.iter().min(), values.iter().max()) {
        (Some(min), Some(max)) if values.len() >= 2 => {
            format!("${} - ${}", with_commas(*min), with_commas(*max))
        }
        _ => DEFAULT_SALARY_RANGE.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Requirements no candidate skill covers (either string containing the other).
pub fn skill_gaps(jobs: &[JobListing], skills: &[String]) -> Vec<String> {
    let skills: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let mut seen: Vec<String> = Vec::new();

    for requirement in jobs.iter().flat_map(|j| &j.requirements) {
        let req = requirement.to_lowercase();
        if seen.contains(&req) {
            continue;
        }
        seen.push(req);
    }

    seen.into_iter()
        .filter(|req| {
            !skills
                .iter()
                .any(|s| !s.is_empty() && (s.contains(req.as_str()) || req.contains(s.as_str())))
        })
        .take(MAX_ITEMS)
        .map(|req| capitalize(&req))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::fallback::fallback_listings;

    fn job(salary: &str, requirements: &[&str]) -> JobListing {
        let mut listing = fallback_listings(None).remove(0);
        listing.salary = salary.to_string();
        listing.requirements = requirements.iter().map(|s| s.to_string()).collect();
        listing
    }

    #[test]
    fn test_market_trend_bands() {
        assert!(market_trend("Databases", 51).starts_with("Very high demand"));
        assert!(market_trend("Databases", 26).starts_with("Strong market"));
        assert!(market_trend("Databases", 11).starts_with("Moderate demand"));
        assert!(market_trend("Databases", 10).starts_with("Limited opportunities"));
    }

    #[test]
    fn test_salary_range_parses_dollars_and_k() {
        let jobs = vec![job("$95,000 - $130,000", &[]), job("80k-100K", &[])];
        assert_eq!(salary_range(&jobs), "$80,000 - $130,000");
    }

    #[test]
    fn test_salary_range_default_when_sparse() {
        assert_eq!(salary_range(&[job("Competitive Salary", &[])]), DEFAULT_SALARY_RANGE);
        assert_eq!(salary_range(&[]), DEFAULT_SALARY_RANGE);
    }

    #[test]
    fn test_top_skills_by_frequency_then_first_seen() {
        let jobs = vec![
            job("", &["Go", "AWS", "Docker"]),
            job("", &["Docker", "SQL"]),
            job("", &["Docker", "AWS"]),
        ];
        assert_eq!(top_skills(&jobs), vec!["Docker", "AWS", "Go", "SQL"]);
    }

    #[test]
    fn test_skill_gaps() {
        let jobs = vec![job("", &["AWS", "Kubernetes", "Terraform"]), job("", &["aws", "Node.js"])];
        let skills = vec!["aws".to_string(), "node".to_string()];
        assert_eq!(skill_gaps(&jobs, &skills), vec!["Kubernetes", "Terraform"]);
    }

    #[test]
    fn test_with_commas() {
        assert_eq!(with_commas(999), "999");
        assert_eq!(with_commas(1000), "1,000");
        assert_eq!(with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_career_insights_assembly() {
        let profile = MatchProfile {
            skills: vec!["react".to_string()],
            domain: "Web Technologies".to_string(),
            experience_years: 1.0,
        };
        let insights = career_insights(&fallback_listings(None), &profile);
        assert_eq!(insights.confidence, 0.94);
        assert!(insights.career_path.contains("Frontend"));
        assert!(insights.market_trends.contains("Web Technologies"));
        assert!(!insights.top_skills.is_empty());
    }
}

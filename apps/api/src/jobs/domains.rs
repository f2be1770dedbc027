//! Per-domain vocabulary shared by search enhancement, match scoring and
//! career insights.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::resume::domain::GENERAL_DOMAIN;
use crate::resume::skills::whole_word_pattern;

pub struct DomainVocabulary {
    /// Lowercase terms that mark a listing as belonging to the domain.
    pub title_terms: &'static [&'static str],
    /// Base search keywords for the domain.
    pub search_term: &'static str,
    /// Keywords appended to the search query.
    pub search_boost: &'static str,
    pub career_path: &'static str,
}

const CLOUD: DomainVocabulary = DomainVocabulary {
    title_terms: &["devops", "cloud", "sre", "site reliability", "platform", "infrastructure"],
    search_term: "cloud devops engineer",
    search_boost: "AWS Azure Kubernetes Docker CI/CD DevOps",
    career_path: "DevOps Engineer → Senior DevOps Engineer → DevOps Architect → Cloud Architect → Director of Cloud Engineering",
};

const WEB: DomainVocabulary = DomainVocabulary {
    title_terms: &["frontend", "front-end", "front end", "web", "full stack", "fullstack", "ui"],
    search_term: "frontend web developer",
    search_boost: "React Angular Vue JavaScript TypeScript UI/UX",
    career_path: "Junior Frontend Developer → Frontend Developer → Senior Frontend Developer → Frontend Architect → UI/UX Engineering Manager",
};

const DATA: DomainVocabulary = DomainVocabulary {
    title_terms: &["data", "machine learning", "ml", "ai", "analytics", "scientist"],
    search_term: "data scientist",
    search_boost: "Python SQL Machine Learning AI Data Science",
    career_path: "Data Analyst → Data Scientist → Senior Data Scientist → Lead Data Scientist → Director of Data Science",
};

const DATABASES: DomainVocabulary = DomainVocabulary {
    title_terms: &["database", "dba", "data engineer", "sql"],
    search_term: "database engineer",
    search_boost: "Python SQL Machine Learning AI Data Science",
    career_path: "Database Developer → Database Engineer → Senior Data Engineer → Data Architect → Head of Data Platform",
};

const MOBILE: DomainVocabulary = DomainVocabulary {
    title_terms: &["mobile", "ios", "android", "flutter", "react native"],
    search_term: "mobile developer",
    search_boost: "software development programming",
    career_path: "Junior Mobile Developer → Mobile Developer → Senior Mobile Developer → Mobile Architect → Engineering Manager",
};

const BACKEND: DomainVocabulary = DomainVocabulary {
    title_terms: &["backend", "back-end", "back end", "server-side", "api", "systems engineer"],
    search_term: "software developer",
    search_boost: "software development programming",
    career_path: "Junior Backend Developer → Backend Developer → Senior Backend Developer → Backend Architect → Engineering Manager",
};

const GENERAL: DomainVocabulary = DomainVocabulary {
    title_terms: &["software", "developer"],
    search_term: "software developer",
    search_boost: "software development programming",
    career_path: "Junior Developer → Software Engineer → Senior Software Engineer → Tech Lead → Engineering Manager",
};

/// Vocabulary for a classifier domain name. Unknown names share the general
/// vocabulary.
pub fn vocabulary(domain: &str) -> &'static DomainVocabulary {
    match domain {
        "Cloud & DevOps" => &CLOUD,
        "Web Technologies" => &WEB,
        "Data Science & AI" => &DATA,
        "Databases" => &DATABASES,
        "Mobile Development" => &MOBILE,
        "Programming Languages" | "Tools & Software" => &BACKEND,
        d if d == GENERAL_DOMAIN => &GENERAL,
        other => {
            let lower = other.to_lowercase();
            if lower.contains("cloud") || lower.contains("devops") {
                &CLOUD
            } else if lower.contains("frontend") || lower.contains("web") {
                &WEB
            } else if lower.contains("data") {
                &DATA
            } else if lower.contains("mobile") {
                &MOBILE
            } else if lower.contains("backend") {
                &BACKEND
            } else {
                &GENERAL
            }
        }
    }
}

const ALL_VOCABULARIES: &[&DomainVocabulary] =
    &[&CLOUD, &WEB, &DATA, &DATABASES, &MOBILE, &BACKEND, &GENERAL];

/// Whole-word matcher for every title term, compiled once.
static TERM_MATCHERS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    ALL_VOCABULARIES
        .iter()
        .flat_map(|v| v.title_terms.iter())
        .map(|term| (*term, whole_word_pattern(term)))
        .collect()
});

/// True when `text` (already lowercase) mentions the domain name or one of its terms.
pub fn mentions_domain(domain: &str, lower_text: &str) -> bool {
    let name = domain.to_lowercase();
    (!name.is_empty() && lower_text.contains(&name))
        || vocabulary(domain).title_terms.iter().any(|term| {
            TERM_MATCHERS
                .get(term)
                .is_some_and(|re| re.is_match(lower_text))
        })
}

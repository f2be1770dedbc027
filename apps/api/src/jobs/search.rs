//! Client for a Jooble-compatible job-search API plus query enhancement.
//!
//! Wire format: `POST {base_url}{api_key}` with `{"keywords", "location"}`,
//! answered by `{"jobs": [...]}`.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::jobs::domains::vocabulary;
use crate::jobs::listing::{format_listing, JobListing};
use crate::jobs::matching::MatchProfile;

pub const SEARCH_SOURCE: &str = "jooble";
pub const DEFAULT_LOCATION: &str = "United States";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job search API returned status {0}")]
    Status(u16),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchQuery {
    pub keywords: String,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// Builds the search query for a profile: the domain's base term, the
/// domain's boost keywords, and the first few candidate skills.
pub fn enhance_search(profile: &MatchProfile, location: Option<&str>) -> JobSearchQuery {
    let vocab = vocabulary(&profile.domain);
    let mut keywords = format!("{} {}", vocab.search_term, vocab.search_boost);
    for skill in profile.skills.iter().take(3) {
        if !keywords.to_lowercase().contains(&skill.to_lowercase()) {
            keywords.push(' ');
            keywords.push_str(skill);
        }
    }

    JobSearchQuery {
        keywords,
        location: location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
            .to_string(),
    }
}

/// Formats a raw `{"jobs": [...]}` response. Anything other than an object
/// with a `jobs` array is a shape error.
pub fn format_jobs(body: &Value) -> Result<Vec<JobListing>, JobSearchError> {
    let jobs = body
        .get("jobs")
        .and_then(Value::as_array)
        .ok_or_else(|| JobSearchError::Shape("missing `jobs` array".to_string()))?;

    let today = Utc::now().format("%Y-%m-%d").to_string();
    Ok(jobs
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| format_listing(raw, i, SEARCH_SOURCE, &today))
        .collect())
}

#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl JobSearchClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, JobSearchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub async fn search(&self, query: &JobSearchQuery) -> Result<Vec<JobListing>, JobSearchError> {
        let url = format!("{}{}", self.base_url, self.api_key);
        debug!("Searching jobs: keywords='{}' location='{}'", query.keywords, query.location);

        let response = self.client.post(&url).json(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(JobSearchError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| JobSearchError::Shape(e.to_string()))?;
        let jobs = format_jobs(&body)?;
        info!("Job search returned {} listings", jobs.len());
        Ok(jobs)
    }
}

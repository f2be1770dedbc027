use anyhow::{Context, Result};

const DEFAULT_JOB_SEARCH_URL: &str = "https://jooble.org/api/";

/// Application configuration loaded from environment variables.
///
/// Nothing is required: every integration left unset selects its fallback
/// (in-memory store, static question bank, fallback job listings, no archive).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    pub job_search_url: String,
    pub job_search_api_key: Option<String>,
    pub question_service_url: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub s3: Option<S3Config>,
    pub http_timeout_secs: u64,
}

/// Object storage settings for the resume archive (MinIO locally, S3 in production).
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let s3 = match optional_env("S3_BUCKET") {
            Some(bucket) => Some(S3Config {
                bucket,
                endpoint: require_env("S3_ENDPOINT")?,
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
            None => None,
        };

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            redis_url: optional_env("REDIS_URL"),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 86_400)?,
            job_search_url: optional_env("JOB_SEARCH_API_URL")
                .unwrap_or_else(|| DEFAULT_JOB_SEARCH_URL.to_string()),
            job_search_api_key: optional_env("JOB_SEARCH_API_KEY"),
            question_service_url: optional_env("QUESTION_SERVICE_URL"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            s3,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", 15)?,
        })
    }
}

/// Returns the variable if it is set and not blank.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| {
        format!("Environment variable '{key}' is required when S3_BUCKET is set")
    })
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

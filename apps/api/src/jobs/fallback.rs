//! Static listings served when the job-search API is missing or failing.

use chrono::Utc;

use crate::jobs::listing::JobListing;
use crate::jobs::search::DEFAULT_LOCATION;

pub const FALLBACK_SOURCE: &str = "fallback";

struct StaticJob {
    title: &'static str,
    company: &'static str,
    salary: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
}

const STATIC_JOBS: &[StaticJob] = &[
    StaticJob {
        title: "Software Engineer",
        company: "Tech Solutions Inc",
        salary: "$90,000 - $120,000",
        description: "Looking for a skilled software engineer with experience in modern web technologies.",
        requirements: &["JavaScript", "React", "Node.js", "AWS", "Git"],
    },
    StaticJob {
        title: "Cloud DevOps Engineer",
        company: "CloudTech Systems",
        salary: "$110,000 - $140,000",
        description: "Seeking an experienced DevOps engineer to manage our cloud infrastructure.",
        requirements: &["AWS", "Kubernetes", "Docker", "CI/CD", "Terraform"],
    },
    StaticJob {
        title: "Senior Software Engineer",
        company: "TechCorp Solutions",
        salary: "$120,000 - $160,000",
        description: "Lead the design of distributed services and mentor a growing engineering team.",
        requirements: &["Java", "Microservices", "AWS", "SQL", "Docker"],
    },
    StaticJob {
        title: "Full Stack Developer",
        company: "Innovation Labs",
        salary: "$95,000 - $125,000",
        description: "Build product features end to end across a Python backend and a modern web frontend.",
        requirements: &["Python", "Django", "PostgreSQL", "Docker"],
    },
];

/// The static listing set, located at `location` (default United States).
pub fn fallback_listings(location: Option<&str>) -> Vec<JobListing> {
    let location = location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LOCATION);
    let today = Utc::now().format("%Y-%m-%d").to_string();

    STATIC_JOBS
        .iter()
        .enumerate()
        .map(|(i, job)| JobListing {
            id: format!("{FALLBACK_SOURCE}-{}", i + 1),
            title: job.title.to_string(),
            company: job.company.to_string(),
            location: location.to_string(),
            salary: job.salary.to_string(),
            job_type: "Full-time".to_string(),
            description: job.description.to_string(),
            requirements: job.requirements.iter().map(|r| r.to_string()).collect(),
            posted_date: today.clone(),
            url: "#".to_string(),
            source: FALLBACK_SOURCE.to_string(),
            applicant_count: None,
            match_score: None,
            urgency: None,
        })
        .collect()
}

//! Job recommendations: external search, match scoring, career insights.

pub mod domains;
pub mod fallback;
pub mod handlers;
pub mod insights;
pub mod listing;
pub mod matching;
pub mod search;

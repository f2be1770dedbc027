//! Mock interviews: question sourcing, answer scoring, session lifecycle.

pub mod analytics;
pub mod bank;
pub mod evaluator;
pub mod expected;
pub mod feedback;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod provider;
pub mod session;

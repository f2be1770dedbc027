//! Interview Answer Scorer.
//!
//! Compares a transcript against the expected-answer record for its question and
//! produces technical / communication / completeness sub-scores from one
//! canonical weight table. Transcripts with no real content get an explicit
//! all-zero evaluation.

use std::collections::HashSet;

use crate::interview::expected::lookup_expected;
use crate::interview::feedback::{
    detailed_feedback, no_answer_suggestions, suggestions_for, weak_answer_suggestions,
    NO_ANSWER_FEEDBACK, WEAK_ANSWER_FEEDBACK,
};
use crate::interview::models::{AnswerEvaluation, Question};

const MIN_ANSWER_CHARS: usize = 15;
const MIN_ANSWER_WORDS: usize = 8;
const MIN_UNIQUE_WORD_RATIO: f64 = 0.4;

const UNKNOWN_PHRASES: &[&str] = &[
    "don't know",
    "dont know",
    "not sure",
    "no idea",
    "not familiar",
    "no clear speech",
    "no audio",
];

const EXAMPLE_INDICATORS: &[&str] = &[
    "example",
    "for instance",
    "such as",
    "like",
    "including",
    "consider",
];

// Weight table: fractions of a 0–100 percentage.
const W_TECH_KEYWORDS: f64 = 0.35;
const W_TECH_CONCEPTS: f64 = 0.30;
const W_COMM_STRUCTURE: f64 = 0.50;
const W_COMPLETE_CONCEPTS: f64 = 0.40;
const W_COMPLETE_KEYWORDS: f64 = 0.15;

/// Percentage of `terms` found (substring, case-insensitive) in `lower_answer`,
/// rounded. An empty term list scores 0.
pub fn calculate_keyword_match(lower_answer: &str, terms: &[&str]) -> u32 {
    if terms.is_empty() {
        return 0;
    }
    let found = terms
        .iter()
        .filter(|t| lower_answer.contains(&t.to_lowercase()))
        .count();
    ((found as f64 / terms.len() as f64) * 100.0).round() as u32
}

pub fn has_examples(answer: &str) -> bool {
    let lower = answer.to_lowercase();
    EXAMPLE_INDICATORS.iter().any(|i| lower.contains(i))
}

/// Base 55, +25 for an opening sentence longer than 15 chars, +30 for examples,
/// +20 for more than one sentence. Capped at 100.
pub fn structure_score(answer: &str) -> u32 {
    let sentences: Vec<&str> = answer
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut score = 55;
    if sentences.first().is_some_and(|s| s.chars().count() > 15) {
        score += 25;
    }
    if has_examples(answer) {
        score += 30;
    }
    if sentences.len() > 1 {
        score += 20;
    }
    score.min(100)
}

enum Floor {
    Empty,
    Weak,
}

fn meaningless(transcript: &str) -> Option<Floor> {
    let trimmed = transcript.trim();
    if trimmed.chars().count() < MIN_ANSWER_CHARS {
        return Some(Floor::Empty);
    }

    let lower = trimmed.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();
    let unique_ratio = unique.len() as f64 / words.len() as f64;
    let has_unknown = UNKNOWN_PHRASES.iter().any(|p| lower.contains(p));

    if has_unknown || words.len() < MIN_ANSWER_WORDS || unique_ratio < MIN_UNIQUE_WORD_RATIO {
        Some(Floor::Weak)
    } else {
        None
    }
}

fn zero_evaluation(floor: Floor, expected_answer: &str) -> AnswerEvaluation {
    let (feedback, suggestions) = match floor {
        Floor::Empty => (NO_ANSWER_FEEDBACK, no_answer_suggestions()),
        Floor::Weak => (WEAK_ANSWER_FEEDBACK, weak_answer_suggestions()),
    };
    AnswerEvaluation {
        technical: 0,
        communication: 0,
        completeness: 0,
        overall: 0,
        feedback: feedback.to_string(),
        suggestions,
        expected_answer: expected_answer.to_string(),
        keywords_found_pct: 0,
        concepts_covered_pct: 0,
    }
}

pub fn evaluate_answer(question: &Question, transcript: &str) -> AnswerEvaluation {
    let expected = lookup_expected(&question.question);

    if let Some(floor) = meaningless(transcript) {
        return zero_evaluation(floor, expected.answer);
    }

    let lower = transcript.to_lowercase();
    let word_count = transcript.split_whitespace().count() as f64;

    let keyword_pct = calculate_keyword_match(&lower, expected.keywords);
    let concept_pct = calculate_keyword_match(&lower, expected.concepts);
    let structure = structure_score(transcript) as f64;
    let examples = has_examples(transcript);

    let kw = keyword_pct as f64;
    let concept = concept_pct as f64;

    let technical = (kw * W_TECH_KEYWORDS
        + concept * W_TECH_CONCEPTS
        + if word_count > 20.0 { 35.0 } else { word_count * 1.5 }
        + 15.0)
        .min(100.0);
    let communication = (structure * W_COMM_STRUCTURE
        + if word_count > 30.0 { 35.0 } else { 25.0 }
        + if examples { 20.0 } else { 10.0 }
        + 10.0)
        .min(100.0);
    let completeness = (concept * W_COMPLETE_CONCEPTS
        + if word_count > 50.0 { 40.0 } else { word_count * 0.8 }
        + kw * W_COMPLETE_KEYWORDS
        + 20.0)
        .min(100.0);

    let multiplier = question.difficulty.multiplier();
    let technical = (technical * multiplier).min(100.0);
    let communication = (communication * multiplier).min(100.0);
    let completeness = (completeness * multiplier).min(100.0);

    let overall = ((technical + communication + completeness) / 3.0).round() as u32;

    AnswerEvaluation {
        technical: technical.round() as u32,
        communication: communication.round() as u32,
        completeness: completeness.round() as u32,
        overall,
        feedback: detailed_feedback(overall, keyword_pct, concept_pct),
        suggestions: suggestions_for(question.question_type),
        expected_answer: expected.answer.to_string(),
        keywords_found_pct: keyword_pct,
        concepts_covered_pct: concept_pct,
    }
}

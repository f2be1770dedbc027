//! Feedback text, canned suggestions and the end-of-interview summary.

use serde::{Deserialize, Serialize};

use crate::interview::models::{AnswerEvaluation, QuestionType};

pub const NO_ANSWER_FEEDBACK: &str =
    "No meaningful answer detected. Please provide a substantive response.";
pub const WEAK_ANSWER_FEEDBACK: &str =
    "No meaningful answer: the response indicates lack of knowledge, is very brief, or has poor audio quality.";

const STRENGTH_THRESHOLD: f64 = 75.0;

/// Threshold-selected feedback: ≥85 excellent, ≥70 good, ≥50 basic, else needs improvement.
pub fn detailed_feedback(overall: u32, keyword_pct: u32, concept_pct: u32) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if overall >= 85 {
        parts.push("Excellent answer! You covered the key concepts comprehensively.");
    } else if overall >= 70 {
        parts.push("Good answer with solid understanding.");
        if keyword_pct < 60 {
            parts.push("Include more specific technical terms.");
        }
        if concept_pct < 60 {
            parts.push("Cover more core concepts.");
        }
    } else if overall >= 50 {
        parts.push("Basic answer that needs improvement.");
        if keyword_pct < 40 {
            parts.push("Use more relevant technical vocabulary.");
        }
        if concept_pct < 40 {
            parts.push("Demonstrate deeper conceptual understanding.");
        }
    } else {
        parts.push(
            "Answer needs significant improvement. Focus on understanding the core concepts and using appropriate technical terminology.",
        );
    }

    parts.join(" ")
}

pub fn suggestions_for(question_type: QuestionType) -> Vec<String> {
    let list: &[&str] = match question_type {
        QuestionType::Technical => &[
            "Include specific technical details",
            "Mention relevant technologies or frameworks",
            "Explain your thought process step by step",
            "Discuss trade-offs and alternatives",
        ],
        QuestionType::Behavioral => &[
            "Use the STAR method (Situation, Task, Action, Result)",
            "Provide specific examples from your experience",
            "Quantify your achievements with numbers",
            "Show learning and growth from challenges",
        ],
        QuestionType::Scenario => &[
            "Break down the problem systematically",
            "Consider multiple approaches",
            "Discuss potential risks and mitigation",
            "Explain your decision-making process",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}

pub fn no_answer_suggestions() -> Vec<String> {
    [
        "Speak clearly into the microphone",
        "Provide detailed explanations",
        "Answer the question directly",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn weak_answer_suggestions() -> Vec<String> {
    [
        "Study the topic more thoroughly",
        "Provide more detailed responses",
        "Ensure clear audio recording",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Interview summary
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionAverages {
    pub technical: f64,
    pub communication: f64,
    pub completeness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub overall_score: u32,
    pub answered: usize,
    pub averages: DimensionAverages,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub summary: String,
}

/// Aggregates per-answer evaluations. An interview with no answers scores 0.
pub fn summarize(evaluations: &[AnswerEvaluation]) -> InterviewSummary {
    let answered = evaluations.len();
    let mean = |f: fn(&AnswerEvaluation) -> u32| -> f64 {
        if answered == 0 {
            0.0
        } else {
            evaluations.iter().map(|e| f(e) as f64).sum::<f64>() / answered as f64
        }
    };

    let overall_score = mean(|e| e.overall).round() as u32;
    let averages = DimensionAverages {
        technical: mean(|e| e.technical),
        communication: mean(|e| e.communication),
        completeness: mean(|e| e.completeness),
    };

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    let dimensions = [
        (
            averages.technical,
            "Strong technical knowledge",
            "Improve technical depth in answers",
        ),
        (
            averages.communication,
            "Clear communication skills",
            "Work on communication clarity",
        ),
        (
            averages.completeness,
            "Comprehensive answers",
            "Provide more complete responses",
        ),
    ];
    for (avg, strength, improvement) in dimensions {
        if avg > STRENGTH_THRESHOLD {
            strengths.push(strength.to_string());
        } else {
            improvements.push(improvement.to_string());
        }
    }

    let label = if overall_score > 80 {
        "Excellent"
    } else if overall_score > 60 {
        "Good"
    } else {
        "Needs Improvement"
    };

    InterviewSummary {
        overall_score,
        answered,
        averages,
        strengths,
        improvements,
        summary: format!("Overall performance: {label}"),
    }
}

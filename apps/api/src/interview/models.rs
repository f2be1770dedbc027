use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Scenario,
}

impl From<String> for QuestionType {
    /// Unknown labels are treated as technical questions.
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "behavioral" | "behavioural" => Self::Behavioral,
            "scenario" | "situational" => Self::Scenario,
            _ => Self::Technical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

impl Difficulty {
    /// The single canonical multiplier table applied to every sub-score.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.15,
            Self::Medium => 1.05,
            Self::Hard => 0.95,
        }
    }
}

/// One interview question, as served by the bank or an external provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(rename = "type", default = "default_question_type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub difficulty: Difficulty,
}

fn default_question_type() -> QuestionType {
    QuestionType::Technical
}

impl Question {
    pub fn new(question: &str, question_type: QuestionType, difficulty: Difficulty) -> Self {
        Self {
            question: question.to_string(),
            question_type,
            difficulty,
        }
    }
}

/// Scores for a single answer. Computed once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub technical: u32,
    pub communication: u32,
    pub completeness: u32,
    pub overall: u32,
    pub feedback: String,
    pub suggestions: Vec<String>,
    pub expected_answer: String,
    pub keywords_found_pct: u32,
    pub concepts_covered_pct: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_deserializes_wire_shape() {
        let q: Question = serde_json::from_str(
            r#"{"question": "What is Rust?", "type": "behavioral", "difficulty": "hard"}"#,
        )
        .unwrap();
        assert_eq!(q.question_type, QuestionType::Behavioral);
        assert_eq!(q.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        let q: Question = serde_json::from_str(
            r#"{"question": "Q", "type": "trivia", "difficulty": "extreme"}"#,
        )
        .unwrap();
        assert_eq!(q.question_type, QuestionType::Technical);
        assert_eq!(q.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_missing_labels_use_defaults() {
        let q: Question = serde_json::from_str(r#"{"question": "Q"}"#).unwrap();
        assert_eq!(q.question_type, QuestionType::Technical);
        assert_eq!(q.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_serializes_lowercase() {
        let q = Question::new("Q", QuestionType::Scenario, Difficulty::Easy);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "scenario");
        assert_eq!(json["difficulty"], "easy");
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(Difficulty::Easy.multiplier(), 1.15);
        assert_eq!(Difficulty::Medium.multiplier(), 1.05);
        assert_eq!(Difficulty::Hard.multiplier(), 0.95);
    }
}

//! Worksheet generation
//!
//! A [`WorksheetGenerator`] turns a teacher's request into a draft
//! [`Worksheet`]. [`MockGenerator`] produces placeholder questions without any
//! network access; [`AnthropicGenerator`] asks a hosted language model and
//! post-processes its answer (ids, default points, answer verification and
//! SVG diagrams for geometry and circuit questions).

pub mod anthropic;
pub mod diagrams;
pub mod mock;
pub mod parse;
pub mod prompt;

pub use anthropic::{AnthropicConfig, AnthropicGenerator};
pub use mock::MockGenerator;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    TrueFalse,
    FillBlank,
    ShortAnswer,
    Essay,
    Matching,
    #[serde(other)]
    Other,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
            QuestionType::FillBlank => "fill_blank",
            QuestionType::ShortAnswer => "short_answer",
            QuestionType::Essay => "essay",
            QuestionType::Matching => "matching",
            QuestionType::Other => "other",
        }
    }

    /// Points awarded when the generator leaves them out
    pub fn default_points(self) -> u32 {
        match self {
            QuestionType::Essay => 10,
            QuestionType::ShortAnswer => 5,
            QuestionType::Matching => 3,
            _ => 2,
        }
    }
}

/// Expected answer: free text, or `A-1`-style pairs for matching questions.
/// Models occasionally answer with a bare number or boolean; those are kept
/// as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Pairs(Vec<String>),
    Raw(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionType,
    pub question: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<Answer>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub explanation: String,
    #[serde(default)]
    pub points: u32,
    /// Inline SVG markup or an image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// TikZ source supplied by the model for geometry figures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex_diagram: Option<String>,
}

/// A teacher's worksheet request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetInput {
    pub topic: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub grade_level: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default)]
    pub question_types: Vec<QuestionType>,
    #[serde(default)]
    pub include_answer_key: bool,
    #[serde(default)]
    pub additional_instructions: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_question_count() -> usize {
    10
}

impl WorksheetInput {
    pub fn validate(&self, max_questions: usize) -> Result<(), WorksheetError> {
        if self.topic.trim().is_empty() {
            return Err(WorksheetError::InvalidInput("topic is required".to_string()));
        }
        if self.question_count == 0 || self.question_count > max_questions {
            return Err(WorksheetError::InvalidInput(format!(
                "question_count must be between 1 and {}",
                max_questions
            )));
        }
        Ok(())
    }

    /// Question type for the `index`-th question, cycling through the
    /// requested types
    pub fn question_type(&self, index: usize) -> QuestionType {
        if self.question_types.is_empty() {
            QuestionType::MultipleChoice
        } else {
            self.question_types[index % self.question_types.len()]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorksheetStatus {
    Draft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worksheet {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub topic: String,
    pub grade_level: String,
    pub difficulty: String,
    pub language: String,
    pub questions: Vec<Question>,
    pub include_answer_key: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub additional_instructions: String,
    pub status: WorksheetStatus,
    pub downloads: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Worksheet {
    /// New draft carrying the request's metadata
    pub fn draft(input: &WorksheetInput, title: String, questions: Vec<Question>) -> Self {
        let now = Utc::now();
        Self {
            id: new_worksheet_id(),
            title,
            subject: input.subject.clone(),
            topic: input.topic.clone(),
            grade_level: input.grade_level.clone(),
            difficulty: input.difficulty.clone(),
            language: input.language.clone(),
            questions,
            include_answer_key: input.include_answer_key,
            additional_instructions: input.additional_instructions.clone(),
            status: WorksheetStatus::Draft,
            downloads: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// `ws_` followed by eight hex digits
fn new_worksheet_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    format!("ws_{id}")
}

#[derive(Debug, thiserror::Error)]
pub enum WorksheetError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("invalid generation response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait WorksheetGenerator: Send + Sync {
    async fn generate_worksheet(&self, input: &WorksheetInput) -> Result<Worksheet, WorksheetError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input() -> WorksheetInput {
        serde_json::from_value(json!({ "topic": "Fractions" })).unwrap()
    }

    #[test]
    fn test_input_defaults() {
        let input = input();
        assert_eq!(input.language, "en");
        assert_eq!(input.question_count, 10);
        assert_eq!(input.question_type(3), QuestionType::MultipleChoice);
        assert!(input.validate(50).is_ok());
    }

    #[test]
    fn test_input_validation() {
        let mut blank = input();
        blank.topic = "  ".to_string();
        assert!(matches!(blank.validate(50), Err(WorksheetError::InvalidInput(_))));

        let mut too_many = input();
        too_many.question_count = 51;
        assert!(too_many.validate(50).is_err());

        let mut none = input();
        none.question_count = 0;
        assert!(none.validate(50).is_err());
    }

    #[test]
    fn test_question_types_cycle() {
        let mut input = input();
        input.question_types = vec![QuestionType::TrueFalse, QuestionType::Essay];
        assert_eq!(input.question_type(0), QuestionType::TrueFalse);
        assert_eq!(input.question_type(1), QuestionType::Essay);
        assert_eq!(input.question_type(2), QuestionType::TrueFalse);
    }

    #[test]
    fn test_default_points() {
        assert_eq!(QuestionType::Essay.default_points(), 10);
        assert_eq!(QuestionType::ShortAnswer.default_points(), 5);
        assert_eq!(QuestionType::Matching.default_points(), 3);
        assert_eq!(QuestionType::MultipleChoice.default_points(), 2);
        assert_eq!(QuestionType::Other.default_points(), 2);
    }

    #[test]
    fn test_question_accepts_model_output() {
        let question: Question = serde_json::from_value(json!({
            "type": "matching",
            "question": "Match the terms",
            "options": ["Term A → Definition 1"],
            "correct_answer": ["A-1"],
            "points": 3
        }))
        .unwrap();
        assert_eq!(question.kind, QuestionType::Matching);
        assert_eq!(question.correct_answer, Some(Answer::Pairs(vec!["A-1".to_string()])));
        assert_eq!(question.id, "");

        let unknown: Question =
            serde_json::from_value(json!({ "type": "drawing", "question": "Draw" })).unwrap();
        assert_eq!(unknown.kind, QuestionType::Other);
        assert_eq!(unknown.points, 0);

        let numeric: Question =
            serde_json::from_value(json!({ "question": "2 + 2 = ?", "correct_answer": 4 })).unwrap();
        assert_eq!(numeric.correct_answer, Some(Answer::Raw(json!(4))));
    }

    #[test]
    fn test_draft_worksheet_id() {
        let worksheet = Worksheet::draft(&input(), "Fractions Worksheet".to_string(), Vec::new());
        assert!(worksheet.id.starts_with("ws_"));
        assert_eq!(worksheet.id.len(), 11);
        assert_eq!(worksheet.status, WorksheetStatus::Draft);
        assert_eq!(worksheet.created_at, worksheet.updated_at);

        let value = serde_json::to_value(&worksheet).unwrap();
        assert_eq!(value["status"], "draft");
        assert!(value.get("additional_instructions").is_none());
    }
}

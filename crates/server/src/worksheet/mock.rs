//! Offline generator producing placeholder questions

use async_trait::async_trait;

use super::{
    Answer, Question, QuestionType, Worksheet, WorksheetError, WorksheetGenerator, WorksheetInput,
};

/// Generates demo worksheets without calling a model. Used when no model API
/// key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGenerator;

impl MockGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorksheetGenerator for MockGenerator {
    async fn generate_worksheet(&self, input: &WorksheetInput) -> Result<Worksheet, WorksheetError> {
        let questions = (0..input.question_count)
            .map(|index| demo_question(index + 1, input.question_type(index), &input.topic))
            .collect();

        Ok(Worksheet::draft(
            input,
            format!("{} Worksheet", input.topic),
            questions,
        ))
    }
}

fn text(value: &str) -> Option<Answer> {
    Some(Answer::Text(value.to_string()))
}

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn demo_question(number: usize, kind: QuestionType, topic: &str) -> Question {
    let mut question = Question {
        id: format!("q_{number}"),
        kind,
        question: String::new(),
        options: Vec::new(),
        correct_answer: None,
        explanation: String::new(),
        points: 2,
        image: None,
        latex_diagram: None,
    };

    match kind {
        QuestionType::MultipleChoice => {
            question.question =
                format!("Question {number}: Which of the following best describes {topic}?");
            question.options = options(&[
                "Option A - Correct answer",
                "Option B",
                "Option C",
                "Option D",
            ]);
            question.correct_answer = text("Option A - Correct answer");
            question.explanation = "This is the correct answer based on the topic.".to_string();
        }
        QuestionType::TrueFalse => {
            question.question = format!(
                "Question {number}: True or False: {topic} is an important concept to learn."
            );
            question.options = options(&["True", "False"]);
            question.correct_answer = text("True");
            question.explanation =
                "This statement is true because of its educational significance.".to_string();
        }
        QuestionType::FillBlank => {
            question.question =
                format!("Question {number}: The main concept of {topic} is called __________.");
            question.correct_answer = text("answer");
            question.explanation = "Fill in the blank with the appropriate term.".to_string();
        }
        QuestionType::ShortAnswer => {
            question.question = format!("Question {number}: Briefly explain the importance of {topic}.");
            question.correct_answer = text("A comprehensive answer explaining the importance...");
            question.explanation = "A good answer should include key concepts.".to_string();
            question.points = 5;
        }
        QuestionType::Essay => {
            question.question = format!(
                "Question {number}: Write a detailed essay about {topic} and its applications."
            );
            question.correct_answer =
                text("Essays are evaluated based on content, structure, and clarity.");
            question.explanation =
                "Include an introduction, body paragraphs, and conclusion.".to_string();
            question.points = 10;
        }
        QuestionType::Matching => {
            question.question = format!("Question {number}: Match the following terms related to {topic}:");
            question.options = options(&[
                "Term A → Definition 1",
                "Term B → Definition 2",
                "Term C → Definition 3",
            ]);
            question.correct_answer = Some(Answer::Pairs(options(&["A-1", "B-2", "C-3"])));
            question.explanation = "Match each term with its correct definition.".to_string();
            question.points = 3;
        }
        QuestionType::Other => {
            question.question = format!("Question {number}: Answer the following about {topic}.");
            question.correct_answer = text("Sample answer");
        }
    }

    question
}

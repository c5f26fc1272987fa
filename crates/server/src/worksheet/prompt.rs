//! Prompts sent to the language model

use super::{Question, WorksheetInput};

pub const SYSTEM_PROMPT: &str = r#"You are an expert educational content creator and curriculum specialist. You write accurate, pedagogically sound worksheets for students.

Accuracy:
- Every question must have a factually correct answer.
- Solve every math problem yourself and check that correct_answer matches your solution.
- Check dates, names, formulas and scientific facts.
- Multiple choice questions have exactly one correct option.

Quality:
- Questions are clear, unambiguous and appropriate for the grade level.
- Explanations say why the answer is correct.
- Wrong options are plausible but clearly incorrect.
- Progress from easier to harder questions.

Mathematical notation:
- Write math in LaTeX: inline $...$, display $$...$$.
- For geometry figures add a "latex_diagram" field holding TikZ code.

Output valid JSON only, following the requested structure exactly."#;

const TYPE_FORMATS: &str = r#"Question type formats:
- multiple_choice: 4 options, correct_answer is the exact text of one option
- true_false: options ["True", "False"], correct_answer "True" or "False"
- fill_blank: mark the blank with __________, correct_answer is the missing word or phrase
- short_answer: no options, correct_answer is a sample response
- essay: no options, higher points, correct_answer lists the grading criteria
- matching: options like "Term A → Definition 1", correct_answer like ["A-1", "B-2"]"#;

fn language_instruction(language: &str) -> String {
    match language {
        "tr" => "Turkish (Türkçe). Write ALL content, including questions, options, answers and explanations, in Turkish".to_string(),
        "es" => "Spanish (Español). Write ALL content in Spanish".to_string(),
        "fr" => "French (Français). Write ALL content in French".to_string(),
        "de" => "German (Deutsch). Write ALL content in German".to_string(),
        "en" => "English. Write all content in English".to_string(),
        other => format!("{other}. Write ALL content in this language"),
    }
}

/// User message asking for a worksheet
pub fn build_prompt(input: &WorksheetInput) -> String {
    let question_types = if input.question_types.is_empty() {
        "multiple_choice".to_string()
    } else {
        input
            .question_types
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let additional = if input.additional_instructions.trim().is_empty() {
        String::new()
    } else {
        format!(
            "\n\nAdditional teacher instructions:\n{}",
            input.additional_instructions
        )
    };

    format!(
        r#"Generate an educational worksheet.

Worksheet details:
- Topic: {topic}
- Subject: {subject}
- Grade level: {grade}
- Difficulty: {difficulty}
- Number of questions: {count}
- Question types: {question_types}
- Language: {language}{additional}

Return a JSON object with this structure:

{{
  "title": "Descriptive worksheet title",
  "questions": [
    {{
      "id": "q_1",
      "type": "multiple_choice",
      "question": "Question text with $LaTeX$ where needed",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correct_answer": "Option A",
      "explanation": "Why the answer is correct",
      "points": 2
    }}
  ]
}}

{TYPE_FORMATS}

Output ONLY the JSON object."#,
        topic = input.topic,
        subject = input.subject,
        grade = input.grade_level,
        difficulty = input.difficulty,
        count = input.question_count,
        language = language_instruction(&input.language),
    )
}

/// Asks the model to re-check the answers of generated questions
pub fn build_verification_prompt(subject: &str, topic: &str, questions: &[Question]) -> String {
    let questions = serde_json::to_string_pretty(questions).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"You are an expert fact-checker and educator. Review these questions and their answers for accuracy.

Subject: {subject}
Topic: {topic}

Questions to verify:
{questions}

For each question check that correct_answer is factually right. Solve math problems yourself. If an answer is wrong, fix correct_answer and explanation. Leave everything else unchanged.

Output ONLY the JSON array of questions in the same structure."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet::QuestionType;
    use serde_json::json;

    fn input() -> WorksheetInput {
        serde_json::from_value(json!({
            "topic": "Fractions",
            "subject": "Math",
            "grade_level": "5",
            "difficulty": "easy",
            "question_count": 6
        }))
        .unwrap()
    }

    #[test]
    fn test_prompt_carries_request() {
        let prompt = build_prompt(&input());
        assert!(prompt.contains("- Topic: Fractions"));
        assert!(prompt.contains("- Grade level: 5"));
        assert!(prompt.contains("- Number of questions: 6"));
        assert!(prompt.contains("- Question types: multiple_choice\n"));
        assert!(prompt.contains("- Language: English."));
        assert!(!prompt.contains("Additional teacher instructions"));
        assert!(prompt.contains(r#""title": "Descriptive worksheet title""#));
    }

    #[test]
    fn test_prompt_lists_types_and_instructions() {
        let mut input = input();
        input.question_types = vec![QuestionType::TrueFalse, QuestionType::Matching];
        input.additional_instructions = "Use pizza examples".to_string();
        input.language = "tr".to_string();

        let prompt = build_prompt(&input);
        assert!(prompt.contains("- Question types: true_false, matching"));
        assert!(prompt.contains("Additional teacher instructions:\nUse pizza examples"));
        assert!(prompt.contains("Turkish (Türkçe)"));
    }

    #[test]
    fn test_unknown_language_is_named() {
        assert_eq!(
            language_instruction("it"),
            "it. Write ALL content in this language"
        );
    }

    #[test]
    fn test_verification_prompt_embeds_questions() {
        let question: Question =
            serde_json::from_value(json!({ "question": "1/2 + 1/4 = ?", "correct_answer": "3/4" }))
                .unwrap();
        let prompt = build_verification_prompt("Math", "Fractions", &[question]);
        assert!(prompt.contains("Topic: Fractions"));
        assert!(prompt.contains("\"correct_answer\": \"3/4\""));
    }
}

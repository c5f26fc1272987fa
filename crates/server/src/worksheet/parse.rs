//! Model output parsing

use serde::Deserialize;

use super::{Question, WorksheetError};

/// Worksheet body as the model returns it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedWorksheet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Locates the JSON document in a model reply.
///
/// A fenced ```` ```json ```` block wins. Otherwise the first balanced object
/// or array is returned, ignoring brackets inside string literals.
pub fn extract_json(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let body = &text[start + "```json".len()..];
        if let Some(end) = body.find("```") {
            let fenced = body[..end].trim();
            if !fenced.is_empty() {
                return Some(fenced);
            }
        }
    }

    let start = text.find(['{', '['])?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

pub fn parse_generated(text: &str) -> Result<GeneratedWorksheet, WorksheetError> {
    let json = extract_json(text)
        .ok_or_else(|| WorksheetError::InvalidResponse("no JSON found in response".to_string()))?;
    serde_json::from_str(json).map_err(|e| WorksheetError::InvalidResponse(e.to_string()))
}

/// Fills in missing `q_N` ids and default points
pub fn normalize_questions(questions: &mut [Question]) {
    for (index, question) in questions.iter_mut().enumerate() {
        if question.id.is_empty() {
            question.id = format!("q_{}", index + 1);
        }
        if question.points == 0 {
            question.points = question.kind.default_points();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet::QuestionType;

    #[test]
    fn test_extract_fenced_block() {
        let reply = "Here you go:\n```json\n  {\"title\": \"Atoms\"}\n```\nEnjoy!";
        assert_eq!(extract_json(reply), Some("{\"title\": \"Atoms\"}"));
    }

    #[test]
    fn test_extract_balanced_object() {
        let reply = r#"Sure. {"title": "A", "questions": [{"question": "x"}]} Let me know."#;
        assert_eq!(
            extract_json(reply),
            Some(r#"{"title": "A", "questions": [{"question": "x"}]}"#)
        );
    }

    #[test]
    fn test_extract_ignores_braces_in_strings() {
        let reply = r#"{"question": "Solve for } in {x \"}\" y}", "points": 2} trailing }"#;
        assert_eq!(
            extract_json(reply),
            Some(r#"{"question": "Solve for } in {x \"}\" y}", "points": 2}"#)
        );
    }

    #[test]
    fn test_extract_array() {
        assert_eq!(extract_json("result: [1, [2, 3]] done"), Some("[1, [2, 3]]"));
    }

    #[test]
    fn test_extract_nothing() {
        assert_eq!(extract_json("I cannot help with that."), None);
        assert_eq!(extract_json("{\"unterminated\": true"), None);
    }

    #[test]
    fn test_parse_generated_reports_missing_json() {
        assert!(matches!(
            parse_generated("no json here"),
            Err(WorksheetError::InvalidResponse(_))
        ));
        assert!(parse_generated("{\"questions\": 3}").is_err());
    }

    #[test]
    fn test_normalize_fills_missing_ids_and_points() {
        let generated = parse_generated(
            r#"```json
{"title": "Cells", "questions": [
  {"id": "x", "type": "essay", "question": "Describe a cell"},
  {"type": "true_false", "question": "Cells exist", "points": 4},
  {"type": "matching", "question": "Match"}
]}
```"#,
        )
        .unwrap();
        assert_eq!(generated.title, "Cells");

        let mut questions = generated.questions;
        normalize_questions(&mut questions);
        let summary: Vec<(&str, QuestionType, u32)> = questions
            .iter()
            .map(|q| (q.id.as_str(), q.kind, q.points))
            .collect();
        assert_eq!(
            summary,
            [
                ("x", QuestionType::Essay, 10),
                ("q_2", QuestionType::TrueFalse, 4),
                ("q_3", QuestionType::Matching, 3),
            ]
        );
    }
}

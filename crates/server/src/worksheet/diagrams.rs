//! Inline SVG figures for geometry and circuit questions

use regex::Regex;

use super::Question;

const DIAGRAM_KEYWORDS: &[&str] = &[
    "geometry",
    "triangle",
    "circle",
    "angle",
    "polygon",
    "area",
    "perimeter",
    "circuit",
    "electrical",
    "resistor",
    "voltage",
    "current",
    "physics",
    "force",
    "motion",
    "vector",
    "trigonometry",
    "sine",
    "cosine",
    "tangent",
];

const TRIANGLE_HINTS: &[&str] = &[
    "triangle",
    "△",
    "law of cosines",
    "law of sines",
    "cosine rule",
    "sine rule",
];

pub const CIRCUIT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 240 120" width="240" height="120"><rect x="20" y="30" width="200" height="60" fill="none" stroke="#1e293b" stroke-width="2"/><rect x="80" y="25" width="30" height="10" fill="#f97316" stroke="#ea580c"/><rect x="130" y="25" width="30" height="10" fill="#f97316" stroke="#ea580c"/><text x="95" y="20" text-anchor="middle" font-size="12" fill="#1e293b">R₁</text><text x="145" y="20" text-anchor="middle" font-size="12" fill="#1e293b">R₂</text><text x="30" y="65" font-size="16" fill="#1e293b">+</text><text x="200" y="65" font-size="16" fill="#1e293b">−</text><text x="120" y="110" text-anchor="middle" font-size="12" fill="#64748b">Series Circuit</text></svg>"##;

/// Whether a worksheet on this topic should carry figures
pub fn needs_diagrams(topic: &str, subject: &str) -> bool {
    let topic = topic.to_lowercase();
    let subject = subject.to_lowercase();
    DIAGRAM_KEYWORDS
        .iter()
        .any(|keyword| topic.contains(keyword) || subject.contains(keyword))
}

/// Attaches a figure to every question that mentions a triangle, circle or
/// circuit. Questions that already have an image are left alone.
pub fn add_diagrams(questions: &mut [Question]) {
    for question in questions.iter_mut().filter(|q| q.image.is_none()) {
        let text = question.question.to_lowercase();
        let mut figure = None;

        if TRIANGLE_HINTS.iter().any(|hint| text.contains(hint))
            || (text.contains("sides") && text.contains("angle"))
        {
            figure = Some(triangle_svg(&question.question));
        }
        if text.contains("circle") || text.contains("radius") {
            figure = Some(circle_svg(&text));
        }
        if text.contains("circuit") || text.contains("resistor") {
            figure = Some(CIRCUIT_SVG.to_string());
        }

        if figure.is_some() {
            question.image = figure;
        }
    }
}

/// Side lengths `a = 3, b = 4, c = 5` as labels, or the letters themselves
fn side_labels(text: &str) -> [String; 3] {
    let mut labels = ["a".to_string(), "b".to_string(), "c".to_string()];
    let Some(pattern) = Regex::new(r"[abc]\s*=\s*(\d+)").ok() else {
        return labels;
    };

    let values: Vec<&str> = pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    if values.len() >= 3 {
        for (label, value) in labels.iter_mut().zip(values) {
            *label = value.to_string();
        }
    }
    labels
}

pub fn triangle_svg(text: &str) -> String {
    let [a, b, c] = side_labels(text);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 180" width="200" height="180"><polygon points="100,20 30,160 170,160" fill="none" stroke="#0d9488" stroke-width="2.5"/><text x="100" y="12" text-anchor="middle" font-size="14" font-weight="bold" fill="#1e293b">A</text><text x="20" y="175" text-anchor="middle" font-size="14" font-weight="bold" fill="#1e293b">B</text><text x="180" y="175" text-anchor="middle" font-size="14" font-weight="bold" fill="#1e293b">C</text><text x="55" y="85" text-anchor="middle" font-size="13" fill="#0f766e">{c}</text><text x="145" y="85" text-anchor="middle" font-size="13" fill="#0f766e">{b}</text><text x="100" y="178" text-anchor="middle" font-size="13" fill="#0f766e">{a}</text></svg>"##
    )
}

/// Expects lowercase text
pub fn circle_svg(text: &str) -> String {
    let radius = Regex::new(r"radius\s*(?:of|is|=)?\s*(\d+)")
        .ok()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|caps| caps.get(1))
        .map_or("r", |m| m.as_str());
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200" width="200" height="200"><circle cx="100" cy="100" r="70" fill="none" stroke="#0d9488" stroke-width="2.5"/><circle cx="100" cy="100" r="3" fill="#1e293b"/><line x1="100" y1="100" x2="170" y2="100" stroke="#f97316" stroke-width="2" stroke-dasharray="5,3"/><text x="100" y="95" text-anchor="middle" font-size="13" fill="#1e293b">O</text><text x="135" y="95" text-anchor="middle" font-size="13" font-weight="bold" fill="#f97316">r = {radius}</text></svg>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet::QuestionType;

    fn question(text: &str) -> Question {
        Question {
            id: "q_1".to_string(),
            kind: QuestionType::ShortAnswer,
            question: text.to_string(),
            options: Vec::new(),
            correct_answer: None,
            explanation: String::new(),
            points: 5,
            image: None,
            latex_diagram: None,
        }
    }

    #[test]
    fn test_needs_diagrams_matches_topic_or_subject() {
        assert!(needs_diagrams("Right Triangles", "Math"));
        assert!(needs_diagrams("Ohm's law", "Physics"));
        assert!(!needs_diagrams("The French Revolution", "History"));
    }

    #[test]
    fn test_triangle_with_side_lengths() {
        let svg = triangle_svg("In triangle ABC, a = 7, b = 8 and c = 9. Find angle C.");
        assert!(svg.contains(r#"viewBox="0 0 200 180""#));
        assert!(svg.contains(">7</text>"));
        assert!(svg.contains(">8</text>"));
        assert!(svg.contains(">9</text>"));
    }

    #[test]
    fn test_triangle_needs_all_three_sides() {
        let svg = triangle_svg("A triangle has a = 7 and b = 8.");
        assert!(svg.contains(">a</text>"));
        assert!(!svg.contains(">7</text>"));
    }

    #[test]
    fn test_circle_radius_label() {
        assert!(circle_svg("a circle with radius of 12 cm").contains("r = 12"));
        assert!(circle_svg("radius=4").contains("r = 4"));
        assert!(circle_svg("find the area of the circle").contains("r = r"));
    }

    #[test]
    fn test_add_diagrams_picks_figure() {
        let mut questions = vec![
            question("Use the Law of Cosines to find the missing side."),
            question("A circle has a radius of 5. Find its area."),
            question("Two resistors sit in a circuit."),
            question("What is 2 + 2?"),
            question("Which sides and angle are given?"),
        ];
        add_diagrams(&mut questions);

        assert!(questions[0].image.as_deref().unwrap().contains("polygon"));
        assert!(questions[1].image.as_deref().unwrap().contains("r = 5"));
        assert_eq!(questions[2].image.as_deref(), Some(CIRCUIT_SVG));
        assert!(questions[3].image.is_none());
        assert!(questions[4].image.as_deref().unwrap().contains("polygon"));
    }

    #[test]
    fn test_add_diagrams_last_match_wins() {
        let mut questions = vec![question("A triangle is inscribed in a circle of radius 3.")];
        add_diagrams(&mut questions);
        assert!(questions[0].image.as_deref().unwrap().contains("r = 3"));
    }

    #[test]
    fn test_add_diagrams_keeps_existing_image() {
        let mut existing = question("Label the triangle.");
        existing.image = Some("https://cdn.example/triangle.png".to_string());
        let mut questions = vec![existing];
        add_diagrams(&mut questions);
        assert_eq!(
            questions[0].image.as_deref(),
            Some("https://cdn.example/triangle.png")
        );
    }
}

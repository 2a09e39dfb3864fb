//! Payload Mapper
//!
//! Converts a [`ParsedQuestion`] into the submission payload for its kind.
//! Total over every question; rejection already happened while parsing.

use crate::models::{AnswerOption, AnswerPayload, ParsedQuestion, QuestionBody, QuestionPayload};
use pulldown_cmark::{html, Options, Parser};

pub const FULL_WEIGHT: f64 = 100.0;

/// Build the submission payload for a question
pub fn map_question(question: &ParsedQuestion, label_prefix: &str) -> QuestionPayload {
    QuestionPayload {
        label: question_label(label_prefix, question.ordinal),
        stem_html: render_stem_html(&question.stem),
        kind: question.kind(),
        score: question.score,
        answers: map_answers(&question.body),
    }
}

pub fn question_label(prefix: &str, ordinal: u32) -> String {
    if prefix.is_empty() {
        ordinal.to_string()
    } else {
        format!("{} {}", prefix, ordinal)
    }
}

/// Render the stem Markdown to HTML
pub fn render_stem_html(stem: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(stem, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

fn map_answers(body: &QuestionBody) -> Vec<AnswerPayload> {
    match body {
        QuestionBody::MultipleChoice { options } => weighted(options, FULL_WEIGHT),
        QuestionBody::MultipleAnswer { options } => {
            let correct = options.iter().filter(|o| o.is_correct).count().max(1);
            weighted(options, FULL_WEIGHT / correct as f64)
        }
        QuestionBody::ShortAnswer { answers } => answers
            .iter()
            .enumerate()
            .map(|(idx, text)| answer(text, FULL_WEIGHT, idx))
            .collect(),
        QuestionBody::Essay | QuestionBody::FileUpload => Vec::new(),
        QuestionBody::TrueFalse { answer: truth } => weighted(
            &[
                AnswerOption::new("True", *truth),
                AnswerOption::new("False", !*truth),
            ],
            FULL_WEIGHT,
        ),
    }
}

/// Correct options get `correct_weight`, the rest 0, in authored order
fn weighted(options: &[AnswerOption], correct_weight: f64) -> Vec<AnswerPayload> {
    options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let weight = if option.is_correct { correct_weight } else { 0.0 };
            answer(&option.text, weight, idx)
        })
        .collect()
}

fn answer(text: &str, weight: f64, idx: usize) -> AnswerPayload {
    AnswerPayload {
        text: text.to_string(),
        weight,
        position: u32::try_from(idx + 1).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    fn question(body: QuestionBody) -> ParsedQuestion {
        ParsedQuestion {
            ordinal: 7,
            stem: "Pick.".to_string(),
            score: 2.0,
            body,
        }
    }

    fn triples(payload: &QuestionPayload) -> Vec<(String, f64, u32)> {
        payload
            .answers
            .iter()
            .map(|a| (a.text.clone(), a.weight, a.position))
            .collect()
    }

    #[test]
    fn test_multiple_choice_weights() {
        let payload = map_question(
            &question(QuestionBody::MultipleChoice {
                options: vec![
                    AnswerOption::new("6", false),
                    AnswerOption::new("5", true),
                    AnswerOption::new("10", false),
                ],
            }),
            "Question",
        );
        assert_eq!(payload.kind, QuestionKind::MultipleChoice);
        assert_eq!(
            triples(&payload),
            vec![
                ("6".to_string(), 0.0, 1),
                ("5".to_string(), 100.0, 2),
                ("10".to_string(), 0.0, 3),
            ]
        );
    }

    #[test]
    fn test_multiple_answer_splits_points() {
        let payload = map_question(
            &question(QuestionBody::MultipleAnswer {
                options: vec![
                    AnswerOption::new("a", true),
                    AnswerOption::new("b", false),
                    AnswerOption::new("c", true),
                    AnswerOption::new("d", true),
                ],
            }),
            "Question",
        );
        let total: f64 = payload.answers.iter().map(|a| a.weight).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(payload.answers[1].weight, 0.0);
        assert!((payload.answers[0].weight - 100.0 / 3.0).abs() < 1e-9);
        let positions: Vec<u32> = payload.answers.iter().map(|a| a.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_short_answer_all_full_weight() {
        let payload = map_question(
            &question(QuestionBody::ShortAnswer {
                answers: vec!["Paris".to_string(), "paris".to_string()],
            }),
            "Question",
        );
        assert!(payload.answers.iter().all(|a| a.weight == 100.0));
        assert_eq!(payload.answers.len(), 2);
    }

    #[test]
    fn test_essay_and_file_upload_have_no_answers() {
        assert!(map_question(&question(QuestionBody::Essay), "Q").answers.is_empty());
        assert!(map_question(&question(QuestionBody::FileUpload), "Q").answers.is_empty());
    }

    #[test]
    fn test_true_false_fixed_order() {
        for truth in [true, false] {
            let payload = map_question(&question(QuestionBody::TrueFalse { answer: truth }), "Q");
            let texts: Vec<&str> = payload.answers.iter().map(|a| a.text.as_str()).collect();
            assert_eq!(texts, vec!["True", "False"]);
            let expected = if truth { [100.0, 0.0] } else { [0.0, 100.0] };
            assert_eq!(payload.answers[0].weight, expected[0]);
            assert_eq!(payload.answers[1].weight, expected[1]);
        }
    }

    #[test]
    fn test_label_stem_and_score() {
        let payload = map_question(&question(QuestionBody::Essay), "Question");
        assert_eq!(payload.label, "Question 7");
        assert_eq!(payload.stem_html, "<p>Pick.</p>");
        assert_eq!(payload.score, 2.0);
        assert_eq!(question_label("", 3), "3");
    }

    #[test]
    fn test_multiline_stem_renders_one_paragraph() {
        let html = render_stem_html("Explain.\nDiscuss fully.");
        assert!(html.starts_with("<p>Explain."));
        assert!(html.contains("Discuss fully.</p>"));
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = map_question(&question(QuestionBody::TrueFalse { answer: true }), "Question");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "true_false");
        assert_eq!(json["stemHtml"], "<p>Pick.</p>");
        assert_eq!(json["answers"][0]["position"], 1);
        assert_eq!(json["answers"][0]["weight"], 100.0);
    }
}

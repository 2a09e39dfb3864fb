//! Integration tests for the quiz bank compiler
//!
//! Covers the full pipeline from raw file text to submission payloads:
//! - Header handling and metadata defaults
//! - Classification and per-kind answer weights
//! - Per-block rejection without aborting the file

use quizbank::compiler::{compile_quiz_bank, parse_body, CompileOptions};
use quizbank::models::{QuestionKind, QuestionPayload, QuizMetadata};
use quizbank::parser::{classify, split_blocks, split_header, ParseMode};

const BANK: &str = r#"---
title: Week 3 Review
points_per_question: 2
shuffle_answers: false
published: true
time_limit: 20
description: Arithmetic and animals
quiz_type: practice
outcomes: [CLO-1]
---

1. What is 2+3?
a) 6
*c) 5
d) 10

2. Which are mammals?
[ ] lizard
[*] dog
[*] whale

3. Explain.
####
Discuss fully.

4. Upload your worksheet.
^^^^

5. Capital of France?
* Paris
* paris

6. The earth orbits the sun.
*a) True
b) False

7. No answer marked here.
a) one
b) two
"#;

fn compile(source: &str) -> quizbank::CompiledQuiz {
    compile_quiz_bank(source, "week-3.quiz.txt", &CompileOptions::default())
}

fn answers(payload: &QuestionPayload) -> Vec<(String, f64, u32)> {
    payload
        .answers
        .iter()
        .map(|a| (a.text.clone(), a.weight, a.position))
        .collect()
}

#[test]
fn test_full_bank() {
    let quiz = compile(BANK);

    assert_eq!(quiz.settings.title, "Week 3 Review");
    assert_eq!(quiz.settings.description, "Arithmetic and animals");
    assert_eq!(quiz.settings.quiz_kind, "practice");
    assert!(quiz.settings.published);
    assert!(!quiz.settings.shuffle_answers);
    assert_eq!(quiz.settings.time_limit_minutes, Some(20));
    assert!(quiz.metadata.outcomes.is_sequence());

    let kinds: Vec<QuestionKind> = quiz.questions.iter().map(|q| q.kind).collect();
    assert_eq!(
        kinds,
        vec![
            QuestionKind::MultipleChoice,
            QuestionKind::MultipleAnswer,
            QuestionKind::Essay,
            QuestionKind::FileUpload,
            QuestionKind::ShortAnswer,
            QuestionKind::TrueFalse,
        ]
    );
    assert!(quiz.questions.iter().all(|q| q.score == 2.0));

    assert_eq!(quiz.rejected.len(), 1);
    assert_eq!(quiz.rejected[0].ordinal, Some(7));
    assert!(quiz.source_checksum.starts_with("sha256:"));
}

#[test]
fn test_example_multiple_choice() {
    let quiz = compile("1. What is 2+3?\na) 6\n*c) 5\nd) 10");
    let q = &quiz.questions[0];
    assert_eq!(q.kind, QuestionKind::MultipleChoice);
    assert_eq!(q.label, "Question 1");
    assert_eq!(
        answers(q),
        vec![
            ("6".to_string(), 0.0, 1),
            ("5".to_string(), 100.0, 2),
            ("10".to_string(), 0.0, 3),
        ]
    );
}

#[test]
fn test_example_multiple_answer() {
    let quiz = compile("2. Pets?\n[ ] cat\n[*] dog");
    let q = &quiz.questions[0];
    assert_eq!(q.kind, QuestionKind::MultipleAnswer);
    let weights: Vec<f64> = q.answers.iter().map(|a| a.weight).collect();
    assert_eq!(weights, vec![0.0, 100.0]);
}

#[test]
fn test_example_essay() {
    let quiz = compile("3. Explain.\n####\nDiscuss fully.");
    let q = &quiz.questions[0];
    assert_eq!(q.kind, QuestionKind::Essay);
    assert!(q.answers.is_empty());

    let parsed = parse_body("3. Explain.\n####\nDiscuss fully.", 1.0, ParseMode::Lenient);
    assert_eq!(parsed.questions[0].stem, "Explain.\nDiscuss fully.");
}

#[test]
fn test_example_true_false() {
    let quiz = compile("4. Sky is blue.\n*a) True\nb) False");
    let q = &quiz.questions[0];
    assert_eq!(q.kind, QuestionKind::TrueFalse);
    let pairs: Vec<(String, f64)> = q.answers.iter().map(|a| (a.text.clone(), a.weight)).collect();
    assert_eq!(
        pairs,
        vec![("True".to_string(), 100.0), ("False".to_string(), 0.0)]
    );
}

#[test]
fn test_true_false_order_is_fixed() {
    let quiz = compile("4. Fire is cold.\na) False\n*b) True\n\n5. Ice is hot.\n*a) False\nb) True");
    for q in &quiz.questions {
        let texts: Vec<&str> = q.answers.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["True", "False"]);
    }
    assert_eq!(quiz.questions[0].answers[0].weight, 100.0);
    assert_eq!(quiz.questions[1].answers[1].weight, 100.0);
}

#[test]
fn test_example_rejected_block_keeps_others() {
    let quiz = compile("1. No star.\na) x\nb) y\n\n2. Starred.\na) x\n*b) y");
    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].label, "Question 2");
    assert_eq!(quiz.rejected.len(), 1);
    assert_eq!(quiz.rejected[0].line, 1);
}

#[test]
fn test_example_no_header() {
    let source = "1. What?\n*a) this\nb) that\n";
    let (header, body) = split_header(source);
    assert!(header.is_empty());
    assert_eq!(body, source);

    let quiz = compile_quiz_bank(source, "banks/chapter-2.quiz.txt", &CompileOptions::default());
    assert_eq!(quiz.metadata, QuizMetadata::defaults("chapter-2"));
}

#[test]
fn test_multiple_choice_has_exactly_one_full_weight() {
    let quiz = compile(BANK);
    for q in quiz.questions.iter().filter(|q| q.kind == QuestionKind::MultipleChoice) {
        assert_eq!(q.answers.iter().filter(|a| a.weight == 100.0).count(), 1);
        assert!(q
            .answers
            .iter()
            .all(|a| a.weight == 100.0 || a.weight == 0.0));
    }
}

#[test]
fn test_multiple_answer_weights_sum_to_100() {
    let quiz = compile("1. Q\n[*] a\n[*] b\n[ ] c\n[*] d\n[*] e\n[*] f\n[ ] g");
    let q = &quiz.questions[0];
    let total: f64 = q.answers.iter().map(|a| a.weight).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(q.answers[2].weight, 0.0);
    assert_eq!(q.answers[6].weight, 0.0);
}

#[test]
fn test_unterminated_header_degrades() {
    let source = "---\ntitle: Broken\n1. Q\n*a) x\nb) y\n";
    let quiz = compile(source);
    assert_eq!(quiz.settings.title, "week-3");
    // the header lines become part of the first block, which has no numbered stem
    assert!(quiz.questions.is_empty());
    assert_eq!(quiz.rejected.len(), 1);
}

#[test]
fn test_mistyped_header_key_keeps_the_rest() {
    let source = "---\ntitle: 2024\npublished: true\npoints_per_question: 3\ntime_limit: 30.5\nshuffle_answers: no\n---\n1. Q\n*a) x\nb) y\n";
    let quiz = compile(source);
    assert_eq!(quiz.metadata.title, "2024");
    assert!(quiz.metadata.published);
    assert!(!quiz.metadata.shuffle_answers);
    assert_eq!(quiz.metadata.time_limit_minutes, None);
    assert_eq!(quiz.questions[0].score, 3.0);
}

#[test]
fn test_strict_mode() {
    let source = "1. Pick.\n*a) 5\nSee chapter 3.\nb) 6";
    let lenient = compile(source);
    assert_eq!(lenient.questions.len(), 1);
    assert_eq!(lenient.questions[0].answers.len(), 2);

    let options = CompileOptions {
        mode: ParseMode::Strict,
        ..Default::default()
    };
    let strict = compile_quiz_bank(source, "q.quiz.txt", &options);
    assert!(strict.questions.is_empty());
    assert!(strict.rejected[0].reason.contains("See chapter 3."));
}

#[test]
fn test_empty_file() {
    let quiz = compile("");
    assert!(quiz.is_empty());
    assert!(quiz.rejected.is_empty());
}

#[test]
fn test_classification_is_idempotent() {
    for block in split_blocks(BANK.split("---\n").last().unwrap()) {
        assert_eq!(classify(&block), classify(&block));
    }
}

#[test]
fn test_json_output_contract() {
    let quiz = compile("1. What is 2+3?\na) 6\n*c) 5");
    let json = serde_json::to_value(&quiz).unwrap();
    let question = &json["questions"][0];
    assert_eq!(question["label"], "Question 1");
    assert_eq!(question["kind"], "multiple_choice");
    assert_eq!(question["stemHtml"], "<p>What is 2+3?</p>");
    assert_eq!(question["score"], 1.0);
    assert_eq!(question["answers"][1]["weight"], 100.0);
    assert_eq!(json["settings"]["title"], "week-3");
    assert_eq!(json["settings"]["shuffleAnswers"], true);
    assert!(json["settings"].get("timeLimitMinutes").is_none());
}

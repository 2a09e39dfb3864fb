//! Question Classifier
//!
//! Assigns exactly one [`QuestionKind`] to a block. Rules are checked in
//! order and the first match wins; the order is the disambiguation policy
//! (a True/False block is also a valid two-option multiple choice block, so
//! it has to be recognized before falling through to the default).

use super::blocks::QuestionBlock;
use super::patterns::{
    bracket_line, is_marker, short_answer_line, true_false_line, ESSAY_MARKER,
    FILE_UPLOAD_MARKER,
};
use crate::models::QuestionKind;

/// A shape predicate paired with the kind it selects
pub struct ClassificationRule {
    pub name: &'static str,
    pub kind: QuestionKind,
    pub matches: fn(&QuestionBlock) -> bool,
}

/// Kind of any block no rule matches
pub const DEFAULT_KIND: QuestionKind = QuestionKind::MultipleChoice;

pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "essay marker",
        kind: QuestionKind::Essay,
        matches: has_essay_marker,
    },
    ClassificationRule {
        name: "file upload marker",
        kind: QuestionKind::FileUpload,
        matches: has_file_upload_marker,
    },
    ClassificationRule {
        name: "bracketed option",
        kind: QuestionKind::MultipleAnswer,
        matches: has_bracketed_option,
    },
    ClassificationRule {
        name: "starred free-text answer",
        kind: QuestionKind::ShortAnswer,
        matches: has_short_answer,
    },
    ClassificationRule {
        name: "true and false options",
        kind: QuestionKind::TrueFalse,
        matches: has_true_and_false,
    },
];

/// Classify a block; deterministic for a given block
pub fn classify(block: &QuestionBlock) -> QuestionKind {
    match CLASSIFICATION_RULES.iter().find(|rule| (rule.matches)(block)) {
        Some(rule) => {
            log::debug!(
                "Block at line {} classified as {} ({})",
                block.line,
                rule.kind,
                rule.name
            );
            rule.kind
        }
        None => {
            log::debug!("Block at line {} defaulted to {}", block.line, DEFAULT_KIND);
            DEFAULT_KIND
        }
    }
}

fn has_essay_marker(block: &QuestionBlock) -> bool {
    block.iter().any(|line| is_marker(line, ESSAY_MARKER))
}

fn has_file_upload_marker(block: &QuestionBlock) -> bool {
    block.iter().any(|line| is_marker(line, FILE_UPLOAD_MARKER))
}

fn has_bracketed_option(block: &QuestionBlock) -> bool {
    block.iter().any(|line| bracket_line(line).is_some())
}

fn has_short_answer(block: &QuestionBlock) -> bool {
    block.iter().any(|line| short_answer_line(line).is_some())
}

fn has_true_and_false(block: &QuestionBlock) -> bool {
    let values: Vec<bool> = block
        .iter()
        .filter_map(true_false_line)
        .map(|(_, value)| value)
        .collect();
    values.contains(&true) && values.contains(&false)
}

//! Kind Parsers
//!
//! Turn a classified block into a [`ParsedQuestion`]. The first line must be
//! `<int>. <stem>`. Lines before the first recognized option line continue the
//! stem; in lenient mode lines after it that are not options are dropped.

use super::blocks::QuestionBlock;
use super::patterns::{
    bracket_line, choice_line, is_marker, short_answer_line, stem_line, true_false_line,
    ESSAY_MARKER, FILE_UPLOAD_MARKER, STEM_LINE,
};
use crate::models::{AnswerOption, ParsedQuestion, QuestionBody, QuestionKind, RejectionCategory};
use serde::{Deserialize, Serialize};

/// How to treat non-option lines once options have started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Drop them silently
    #[default]
    Lenient,
    /// Reject the block
    Strict,
}

/// Why a block was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionError {
    #[error("first line must be '<number>. <stem>', found '{0}'")]
    MissingStem(String),

    #[error("question number in '{0}' is too large")]
    OrdinalOutOfRange(String),

    #[error("no option is marked correct")]
    NoCorrectAnswer,

    #[error("{0} options are marked correct, multiple choice allows exactly one")]
    MultipleCorrectAnswers(usize),

    #[error("no '* <answer>' lines found")]
    NoAnswers,

    #[error("neither True nor False is marked correct")]
    NoTrueFalseMarker,

    #[error("both True and False are marked correct")]
    AmbiguousTrueFalse,

    #[error("text after the answer options: '{0}'")]
    TrailingText(String),
}

impl QuestionError {
    /// Structural errors concern the block's shape rather than its answers
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            QuestionError::MissingStem(_)
                | QuestionError::OrdinalOutOfRange(_)
                | QuestionError::TrailingText(_)
        )
    }

    pub fn category(&self) -> RejectionCategory {
        if self.is_structural() {
            RejectionCategory::Structural
        } else {
            RejectionCategory::Validation
        }
    }
}

/// Parse a block already classified as `kind`
pub fn parse_question(
    block: &QuestionBlock,
    kind: QuestionKind,
    score: f64,
    mode: ParseMode,
) -> Result<ParsedQuestion, QuestionError> {
    let (ordinal, head) = match stem_line(block.head()) {
        Some(found) => found,
        None if STEM_LINE.is_match(block.head()) => {
            return Err(QuestionError::OrdinalOutOfRange(block.head().trim().to_string()));
        }
        None => return Err(QuestionError::MissingStem(block.head().trim().to_string())),
    };

    let mut stem_lines = vec![head.to_string()];
    let rest = block.rest();

    let body = match kind {
        QuestionKind::MultipleChoice => {
            let options = scan_options(rest, mode, &mut stem_lines, choice_line)?;
            let correct = options.iter().filter(|o| o.is_correct).count();
            match correct {
                0 => return Err(QuestionError::NoCorrectAnswer),
                1 => QuestionBody::MultipleChoice { options },
                n => return Err(QuestionError::MultipleCorrectAnswers(n)),
            }
        }
        QuestionKind::MultipleAnswer => {
            let options = scan_options(rest, mode, &mut stem_lines, bracket_line)?;
            if !options.iter().any(|o| o.is_correct) {
                return Err(QuestionError::NoCorrectAnswer);
            }
            QuestionBody::MultipleAnswer { options }
        }
        QuestionKind::ShortAnswer => {
            let answers: Vec<String> = scan(rest, mode, &mut stem_lines, short_answer_line)?
                .into_iter()
                .map(str::to_string)
                .collect();
            if answers.is_empty() {
                return Err(QuestionError::NoAnswers);
            }
            QuestionBody::ShortAnswer { answers }
        }
        QuestionKind::TrueFalse => {
            let marks = scan(rest, mode, &mut stem_lines, true_false_line)?;
            let true_marked = marks.iter().any(|&(correct, value)| correct && value);
            let false_marked = marks.iter().any(|&(correct, value)| correct && !value);
            match (true_marked, false_marked) {
                (true, false) => QuestionBody::TrueFalse { answer: true },
                (false, true) => QuestionBody::TrueFalse { answer: false },
                (false, false) => return Err(QuestionError::NoTrueFalseMarker),
                (true, true) => return Err(QuestionError::AmbiguousTrueFalse),
            }
        }
        QuestionKind::Essay => {
            collect_free_text(rest, ESSAY_MARKER, &mut stem_lines);
            QuestionBody::Essay
        }
        QuestionKind::FileUpload => {
            collect_free_text(rest, FILE_UPLOAD_MARKER, &mut stem_lines);
            QuestionBody::FileUpload
        }
    };

    Ok(ParsedQuestion {
        ordinal,
        stem: normalize_stem(&stem_lines),
        score,
        body,
    })
}

/// Trim stem lines, drop blank ones, join with newlines
pub fn normalize_stem<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single pass over the lines after the head.
///
/// Lines before the first recognized option go to the stem. Later lines that
/// are not options are dropped (lenient) or reject the block (strict).
fn scan<'a, T>(
    lines: &'a [String],
    mode: ParseMode,
    stem_lines: &mut Vec<String>,
    recognize: impl Fn(&'a str) -> Option<T>,
) -> Result<Vec<T>, QuestionError> {
    let mut options = Vec::new();

    for line in lines {
        if let Some(option) = recognize(line.as_str()) {
            options.push(option);
        } else if options.is_empty() {
            stem_lines.push(line.clone());
        } else if mode == ParseMode::Strict {
            return Err(QuestionError::TrailingText(line.trim().to_string()));
        } else {
            log::debug!("Dropping text after answer options: '{}'", line.trim());
        }
    }

    Ok(options)
}

fn scan_options<'a>(
    lines: &'a [String],
    mode: ParseMode,
    stem_lines: &mut Vec<String>,
    recognize: fn(&'a str) -> Option<(bool, &'a str)>,
) -> Result<Vec<AnswerOption>, QuestionError> {
    Ok(scan(lines, mode, stem_lines, recognize)?
        .into_iter()
        .map(|(is_correct, text)| AnswerOption::new(text, is_correct))
        .collect())
}

fn collect_free_text(lines: &[String], marker: &str, stem_lines: &mut Vec<String>) {
    stem_lines.extend(
        lines
            .iter()
            .filter(|line| !is_marker(line, marker))
            .cloned(),
    );
}

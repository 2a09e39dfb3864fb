use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of question kinds a quiz bank can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "multiple_choice")]
    MultipleChoice,
    #[serde(rename = "multiple_answers")]
    MultipleAnswer,
    #[serde(rename = "short_answer")]
    ShortAnswer,
    #[serde(rename = "essay")]
    Essay,
    #[serde(rename = "file_upload")]
    FileUpload,
    #[serde(rename = "true_false")]
    TrueFalse,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::MultipleChoice,
        QuestionKind::MultipleAnswer,
        QuestionKind::ShortAnswer,
        QuestionKind::Essay,
        QuestionKind::FileUpload,
        QuestionKind::TrueFalse,
    ];

    /// Wire tag used in submission payloads
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::MultipleAnswer => "multiple_answers",
            QuestionKind::ShortAnswer => "short_answer",
            QuestionKind::Essay => "essay",
            QuestionKind::FileUpload => "file_upload",
            QuestionKind::TrueFalse => "true_false",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A kind tag that names none of the six question kinds.
///
/// Unlike per-block rejections this is not recoverable: it means the caller
/// and the compiler disagree on the set of kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized question kind: '{0}'")]
pub struct UnrecognizedKind(pub String);

impl FromStr for QuestionKind {
    type Err = UnrecognizedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        QuestionKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == normalized)
            .ok_or_else(|| UnrecognizedKind(s.to_string()))
    }
}

/// One answer choice within a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// Kind-specific content of a parsed question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionBody {
    /// Exactly one option is correct
    MultipleChoice { options: Vec<AnswerOption> },
    /// One or more options are correct
    #[serde(rename = "multiple_answers")]
    MultipleAnswer { options: Vec<AnswerOption> },
    /// Every listed answer is accepted
    ShortAnswer { answers: Vec<String> },
    Essay,
    FileUpload,
    /// `answer` is the truth value of the correct option
    TrueFalse { answer: bool },
}

/// A question block that passed its kind's validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// Numeric label from the block's first line (not checked for uniqueness)
    pub ordinal: u32,
    /// Normalized stem, lines joined with `\n`
    pub stem: String,
    pub score: f64,
    pub body: QuestionBody,
}

impl ParsedQuestion {
    pub fn kind(&self) -> QuestionKind {
        match &self.body {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::MultipleAnswer { .. } => QuestionKind::MultipleAnswer,
            QuestionBody::ShortAnswer { .. } => QuestionKind::ShortAnswer,
            QuestionBody::Essay => QuestionKind::Essay,
            QuestionBody::FileUpload => QuestionKind::FileUpload,
            QuestionBody::TrueFalse { .. } => QuestionKind::TrueFalse,
        }
    }

    /// Flattened option view in authored order.
    ///
    /// True/False questions always yield `[True, False]`; short answers yield
    /// one correct option per accepted answer.
    pub fn options(&self) -> Vec<AnswerOption> {
        match &self.body {
            QuestionBody::MultipleChoice { options } | QuestionBody::MultipleAnswer { options } => {
                options.clone()
            }
            QuestionBody::ShortAnswer { answers } => answers
                .iter()
                .map(|answer| AnswerOption::new(answer.as_str(), true))
                .collect(),
            QuestionBody::Essay | QuestionBody::FileUpload => Vec::new(),
            QuestionBody::TrueFalse { answer } => vec![
                AnswerOption::new("True", *answer),
                AnswerOption::new("False", !*answer),
            ],
        }
    }
}

use super::question::QuestionKind;
use super::quiz::{QuizMetadata, QuizSettings};
use serde::{Deserialize, Serialize};

/// One answer entry of a submission payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub text: String,
    /// Scoring weight in percent (0-100)
    pub weight: f64,
    /// 1-based position in authored order
    pub position: u32,
}

/// Submission payload for a single question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub label: String,
    pub stem_html: String,
    pub kind: QuestionKind,
    pub score: f64,
    pub answers: Vec<AnswerPayload>,
}

/// Kind of failure that dropped a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCategory {
    /// The block's shape is wrong (no numbered stem line, text after options)
    Structural,
    /// The block parsed but its answers fail the kind's rule
    Validation,
}

impl RejectionCategory {
    pub fn name(&self) -> &'static str {
        match self {
            RejectionCategory::Structural => "structural",
            RejectionCategory::Validation => "validation",
        }
    }
}

/// A block dropped during compilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedBlock {
    /// 1-based line of the block's first line within the body
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ordinal: Option<u32>,
    pub category: RejectionCategory,
    pub reason: String,
}

/// Everything compiled from one quiz bank file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledQuiz {
    pub metadata: QuizMetadata,
    pub settings: QuizSettings,
    pub questions: Vec<QuestionPayload>,
    pub rejected: Vec<RejectedBlock>,
    pub source_checksum: String,
}

impl CompiledQuiz {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions per kind, in kind order, skipping absent kinds
    pub fn kind_counts(&self) -> Vec<(QuestionKind, usize)> {
        QuestionKind::ALL
            .into_iter()
            .map(|kind| {
                let count = self.questions.iter().filter(|q| q.kind == kind).count();
                (kind, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

//! Quiz bank compiler
//!
//! raw text → header split → blocks → classify → kind parser → payload.
//! Pure and synchronous; per-block failures are logged and skipped, never
//! fatal for the file.

pub mod payload;

pub use payload::{map_question, question_label, render_stem_html};

use crate::models::{CompiledQuiz, ParsedQuestion, QuizMetadata, QuizbankConfig, RejectedBlock};
use crate::parser::{
    calculate_checksum, classify, parse_question, patterns, split_blocks, split_header, ParseMode,
};
use std::path::Path;

/// File name suffix of quiz bank files
pub const QUIZ_BANK_EXTENSION: &str = ".quiz.txt";

/// Knobs for a compile run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub mode: ParseMode,
    pub label_prefix: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Lenient,
            label_prefix: "Question".to_string(),
        }
    }
}

impl From<&QuizbankConfig> for CompileOptions {
    fn from(config: &QuizbankConfig) -> Self {
        Self {
            mode: if config.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
            label_prefix: config.label_prefix.clone(),
        }
    }
}

/// Parsed questions of a body plus the blocks that were dropped
#[derive(Debug, Clone, Default)]
pub struct ParsedBody {
    pub questions: Vec<ParsedQuestion>,
    pub rejected: Vec<RejectedBlock>,
}

/// Compile the text of one quiz bank file.
///
/// `file_name` supplies the title when the header has none.
pub fn compile_quiz_bank(source: &str, file_name: &str, options: &CompileOptions) -> CompiledQuiz {
    let fallback_title = title_from_file_name(file_name);
    let (header, body) = split_header(source);
    let metadata = QuizMetadata::from_mapping(&header, &fallback_title);

    let parsed = parse_body(&body, metadata.points_per_question, options.mode);
    let questions: Vec<_> = parsed
        .questions
        .iter()
        .map(|question| map_question(question, &options.label_prefix))
        .collect();

    if questions.is_empty() {
        log::info!("Quiz bank '{}' produced no questions", file_name);
    }

    CompiledQuiz {
        settings: metadata.settings(),
        metadata,
        questions,
        rejected: parsed.rejected,
        source_checksum: calculate_checksum(source),
    }
}

/// Parse every block of a body in source order
pub fn parse_body(body: &str, score: f64, mode: ParseMode) -> ParsedBody {
    let mut parsed = ParsedBody::default();

    for block in split_blocks(body) {
        let kind = classify(&block);
        match parse_question(&block, kind, score, mode) {
            Ok(question) => parsed.questions.push(question),
            Err(e) => {
                let ordinal = patterns::stem_line(block.head()).map(|(ordinal, _)| ordinal);
                log::warn!(
                    "Skipping {} block at line {}{}: {}",
                    kind,
                    block.line,
                    ordinal.map(|o| format!(" (question {})", o)).unwrap_or_default(),
                    e
                );
                parsed.rejected.push(RejectedBlock {
                    line: block.line,
                    ordinal,
                    category: e.category(),
                    reason: e.to_string(),
                });
            }
        }
    }

    parsed
}

/// Title fallback: the file name without directories or the bank extension
pub fn title_from_file_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());

    if let Some(stripped) = name.strip_suffix(QUIZ_BANK_EXTENSION) {
        if !stripped.is_empty() {
            return stripped.to_string();
        }
    }

    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or(name)
}

// Quizbank - Shorthand quiz bank compiler
// Turns plain-text quiz banks into structured question payloads for a quiz-hosting service

pub mod cli;
pub mod compiler;
pub mod models;
pub mod parser;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use compiler::{compile_quiz_bank, CompileOptions};
pub use models::{
    AnswerOption, CompiledQuiz, ParsedQuestion, QuestionBody, QuestionKind, QuestionPayload,
    QuizMetadata, QuizbankConfig,
};
pub use parser::{ParseMode, QuestionError};

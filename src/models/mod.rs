pub mod config;
pub mod payload;
pub mod question;
pub mod quiz;

pub use config::QuizbankConfig;
pub use payload::{AnswerPayload, CompiledQuiz, QuestionPayload, RejectedBlock, RejectionCategory};
pub use question::{AnswerOption, ParsedQuestion, QuestionBody, QuestionKind, UnrecognizedKind};
pub use quiz::{QuizHeader, QuizMetadata, QuizSettings};

pub mod blocks;
pub mod classifier;
pub mod header;
pub mod patterns;
pub mod question;

pub use blocks::{split_blocks, QuestionBlock};
pub use classifier::{classify, ClassificationRule, CLASSIFICATION_RULES, DEFAULT_KIND};
pub use header::{calculate_checksum, normalize_content, split_header};
pub use question::{normalize_stem, parse_question, ParseMode, QuestionError};

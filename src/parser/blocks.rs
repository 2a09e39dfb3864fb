//! Block Segmenter
//!
//! Splits the shorthand body into question blocks on blank-line boundaries.

/// Contiguous non-blank lines of the body representing one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    /// 1-based line number of the first line within the body
    pub line: usize,
    pub lines: Vec<String>,
}

impl QuestionBlock {
    pub fn new(line: usize, lines: Vec<String>) -> Self {
        Self { line, lines }
    }

    /// First line of the block, expected to be `<int>. <stem>`
    pub fn head(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// Lines after the head
    pub fn rest(&self) -> &[String] {
        self.lines.get(1..).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Split body text into blocks separated by one or more blank lines.
///
/// Whitespace-only lines count as blank. Source order is preserved and no
/// block is ever empty.
pub fn split_blocks(body: &str) -> Vec<QuestionBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<QuestionBlock> = None;

    for (idx, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        current
            .get_or_insert_with(|| QuestionBlock::new(idx + 1, Vec::new()))
            .lines
            .push(line.trim_end().to_string());
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}

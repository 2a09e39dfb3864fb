//! Line patterns of the quiz bank shorthand

use once_cell::sync::Lazy;
use regex::Regex;

/// Line that marks a block as an essay question
pub const ESSAY_MARKER: &str = "####";
/// Line that marks a block as a file-upload question
pub const FILE_UPLOAD_MARKER: &str = "^^^^";

/// `<int>. <stem text>`
pub static STEM_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\.\s+(\S.*?)\s*$").expect("valid stem pattern"));

/// `a) text` or `*a) text`
pub static CHOICE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\*)?\s*([A-Za-z])\)\s*(\S.*?)\s*$").expect("valid choice pattern")
});

/// `[ ] text` or `[*] text`
pub static BRACKET_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\[(\*| ?)\]\s*(\S.*?)\s*$").expect("valid bracket pattern")
});

/// `* text`
pub static STAR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\*\s+(\S.*?)\s*$").expect("valid short answer pattern"));

/// `a) True`, `*b) false`, ...
pub static TRUE_FALSE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\*)?\s*[a-z]\)\s*(true|false)\s*$").expect("valid true/false pattern")
});

pub fn is_marker(line: &str, marker: &str) -> bool {
    line.trim() == marker
}

/// `(ordinal, stem text)` of a numbered stem line
pub fn stem_line(line: &str) -> Option<(u32, &str)> {
    let caps = STEM_LINE.captures(line)?;
    let ordinal = caps.get(1)?.as_str().parse().ok()?;
    Some((ordinal, caps.get(2)?.as_str()))
}

/// `(is_correct, text)` of a lettered choice line
pub fn choice_line(line: &str) -> Option<(bool, &str)> {
    let caps = CHOICE_LINE.captures(line)?;
    Some((caps.get(1).is_some(), caps.get(3)?.as_str()))
}

/// `(is_correct, text)` of a bracketed option line
pub fn bracket_line(line: &str) -> Option<(bool, &str)> {
    let caps = BRACKET_LINE.captures(line)?;
    Some((caps.get(1)?.as_str() == "*", caps.get(2)?.as_str()))
}

/// Accepted answer text of a `* <text>` line; lettered choices are excluded
pub fn short_answer_line(line: &str) -> Option<&str> {
    if CHOICE_LINE.is_match(line) {
        return None;
    }
    let caps = STAR_LINE.captures(line)?;
    Some(caps.get(1)?.as_str())
}

/// `(is_correct, value)` of a True/False option line
pub fn true_false_line(line: &str) -> Option<(bool, bool)> {
    let caps = TRUE_FALSE_LINE.captures(line)?;
    let value = caps.get(2)?.as_str().eq_ignore_ascii_case("true");
    Some((caps.get(1).is_some(), value))
}

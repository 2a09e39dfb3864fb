//! Quiz Header Splitter
//!
//! Detaches the optional YAML metadata block from the shorthand body:
//! - BOM (Byte Order Mark) stripping
//! - Line ending normalization (CRLF → LF)
//! - Leading blank lines before the opening `---` are allowed
//!
//! A missing header is not an error. An unterminated or non-mapping header
//! degrades to empty metadata instead of failing the file.

use serde_yaml::{Mapping, Value};
use sha2::{Digest, Sha256};

const DELIMITER: &str = "---";

/// Outcome of scanning a document for a header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderScan<'a> {
    /// First non-blank line is not a delimiter
    Absent,
    /// Opening delimiter without a matching closing one
    Unterminated,
    Found { yaml: &'a str, body: &'a str },
}

/// Split raw quiz bank text into `(header mapping, body)`.
///
/// Without a usable header the mapping is empty and the body is `content`
/// unchanged. With a header the body is everything after the closing
/// delimiter, line endings normalized.
pub fn split_header(content: &str) -> (Mapping, String) {
    let normalized = normalize_content(content);

    match scan_header(&normalized) {
        HeaderScan::Absent => (Mapping::new(), content.to_string()),
        HeaderScan::Unterminated => {
            log::warn!("Quiz header opened with '---' but never closed; treating whole file as body");
            (Mapping::new(), content.to_string())
        }
        HeaderScan::Found { yaml, body } => (parse_header_mapping(yaml), body.to_string()),
    }
}

/// Normalize content: strip BOM, normalize line endings
///
/// Handles:
/// - UTF-8 BOM (EF BB BF / U+FEFF)
/// - CRLF → LF
/// - CR → LF (old Mac style)
pub fn normalize_content(content: &str) -> String {
    let s = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Locate the header block in normalized content
///
/// Delimiter lines are `---` at column 0, trailing whitespace allowed.
pub fn scan_header(content: &str) -> HeaderScan<'_> {
    let mut offset = 0;
    let mut lines = content.split_inclusive('\n');
    let mut opened = false;

    for line in lines.by_ref() {
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }
        if !is_delimiter(line) {
            return HeaderScan::Absent;
        }
        opened = true;
        break;
    }

    if !opened {
        return HeaderScan::Absent;
    }

    let header_start = offset;
    for line in lines {
        if is_delimiter(line) {
            return HeaderScan::Found {
                yaml: &content[header_start..offset],
                body: &content[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    HeaderScan::Unterminated
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parse header YAML, keeping only mapping content
fn parse_header_mapping(yaml: &str) -> Mapping {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => {
            log::warn!("Quiz header is not a key/value mapping; using default metadata");
            Mapping::new()
        }
        Err(e) => {
            log::warn!("Failed to parse quiz header YAML: {}; using default metadata", e);
            Mapping::new()
        }
    }
}

// =============================================================================
// Checksum Functions
// =============================================================================

/// Normalize content for checksum calculation
///
/// Prevents false change detection from whitespace-only edits:
/// - Normalize line endings (CRLF → LF)
/// - Trim trailing whitespace per line
/// - Remove trailing newlines
fn normalize_for_checksum(content: &str) -> String {
    normalize_content(content)
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Calculate SHA256 checksum of normalized source text
///
/// Returns checksum in format: `sha256:<hex>`
pub fn calculate_checksum(content: &str) -> String {
    let normalized = normalize_for_checksum(content);
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

// =============================================================================
// Tests
// =============================================================================

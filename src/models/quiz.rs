use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

pub const DEFAULT_POINTS_PER_QUESTION: f64 = 1.0;
pub const DEFAULT_QUIZ_KIND: &str = "graded";

/// Recognized header keys as written in a quiz bank file.
///
/// Every field is optional; defaults are applied when building [`QuizMetadata`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizHeader {
    pub title: Option<String>,
    pub points_per_question: Option<f64>,
    pub shuffle_answers: Option<bool>,
    pub published: Option<bool>,
    pub time_limit: Option<i64>,
    pub description: Option<String>,
    pub quiz_type: Option<String>,
    pub topics: Value,
    pub outcomes: Value,
    pub group: Value,
}

impl QuizHeader {
    /// Read each recognized key on its own.
    ///
    /// A value of the wrong type only loses that key; unknown keys are ignored.
    pub fn from_mapping(mapping: &Mapping) -> Self {
        Self {
            title: read_key(mapping, "title", scalar_string),
            points_per_question: read_key(mapping, "points_per_question", Value::as_f64),
            shuffle_answers: read_key(mapping, "shuffle_answers", flag),
            published: read_key(mapping, "published", flag),
            time_limit: read_key(mapping, "time_limit", Value::as_i64),
            description: read_key(mapping, "description", scalar_string),
            quiz_type: read_key(mapping, "quiz_type", scalar_string),
            topics: mapping.get("topics").cloned().unwrap_or_default(),
            outcomes: mapping.get("outcomes").cloned().unwrap_or_default(),
            group: mapping.get("group").cloned().unwrap_or_default(),
        }
    }
}

fn read_key<T>(mapping: &Mapping, key: &str, convert: fn(&Value) -> Option<T>) -> Option<T> {
    let value = mapping.get(key).filter(|v| !v.is_null())?;
    let converted = convert(value);
    if converted.is_none() {
        log::warn!("Ignoring header key '{}': unexpected value {:?}", key, value);
    }
    converted
}

/// Strings, numbers and booleans read as text
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Booleans, plus the YAML 1.1 spellings (`yes`, `no`, `on`, `off`)
fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "on" => Some(true),
            "false" | "no" | "n" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Quiz-level settings resolved from the header block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub title: String,
    pub points_per_question: f64,
    pub shuffle_answers: bool,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u32>,
    pub description: String,
    pub quiz_kind: String,
    /// Passed through untouched
    #[serde(skip_serializing_if = "Value::is_null")]
    pub topics: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub outcomes: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub group: Value,
}

impl QuizMetadata {
    /// Metadata for a file without a header
    pub fn defaults(fallback_title: &str) -> Self {
        Self {
            title: fallback_title.to_string(),
            points_per_question: DEFAULT_POINTS_PER_QUESTION,
            shuffle_answers: true,
            published: false,
            time_limit_minutes: None,
            description: String::new(),
            quiz_kind: DEFAULT_QUIZ_KIND.to_string(),
            topics: Value::Null,
            outcomes: Value::Null,
            group: Value::Null,
        }
    }

    /// Build metadata from a header mapping, falling back key by key
    pub fn from_mapping(mapping: &Mapping, fallback_title: &str) -> Self {
        Self::from_header(QuizHeader::from_mapping(mapping), fallback_title)
    }

    pub fn from_header(header: QuizHeader, fallback_title: &str) -> Self {
        let mut metadata = Self::defaults(fallback_title);

        if let Some(title) = header.title.filter(|t| !t.trim().is_empty()) {
            metadata.title = title.trim().to_string();
        }

        match header.points_per_question {
            Some(points) if points > 0.0 && points.is_finite() => {
                metadata.points_per_question = points;
            }
            Some(points) => {
                log::warn!(
                    "points_per_question must be positive (got {}), using {}",
                    points,
                    DEFAULT_POINTS_PER_QUESTION
                );
            }
            None => {}
        }

        if let Some(shuffle) = header.shuffle_answers {
            metadata.shuffle_answers = shuffle;
        }
        if let Some(published) = header.published {
            metadata.published = published;
        }

        match header.time_limit {
            Some(minutes) if minutes > 0 => match u32::try_from(minutes) {
                Ok(minutes) => metadata.time_limit_minutes = Some(minutes),
                Err(_) => log::warn!("time_limit {} is out of range, ignoring", minutes),
            },
            Some(minutes) => {
                log::warn!("time_limit must be positive (got {}), ignoring", minutes);
            }
            None => {}
        }

        if let Some(description) = header.description {
            metadata.description = description;
        }
        if let Some(kind) = header.quiz_type.filter(|k| !k.trim().is_empty()) {
            metadata.quiz_kind = kind.trim().to_string();
        }

        metadata.topics = header.topics;
        metadata.outcomes = header.outcomes;
        metadata.group = header.group;
        metadata
    }

    /// Settings handed once per file to the publishing side
    pub fn settings(&self) -> QuizSettings {
        QuizSettings {
            title: self.title.clone(),
            description: self.description.clone(),
            quiz_kind: self.quiz_kind.clone(),
            published: self.published,
            shuffle_answers: self.shuffle_answers,
            time_limit_minutes: self.time_limit_minutes,
        }
    }
}

/// Quiz-level part of the output contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    pub title: String,
    pub description: String,
    pub quiz_kind: String,
    pub published: bool,
    pub shuffle_answers: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time_limit_minutes: Option<u32>,
}

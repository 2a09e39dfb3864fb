use crate::compiler::QUIZ_BANK_EXTENSION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "quizbank.toml";

/// Project configuration loaded from `quizbank.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizbankConfig {
    /// Directory holding quiz bank files, relative to the project root
    pub bank_dir: PathBuf,
    /// File name suffix identifying quiz bank files
    pub extension: String,
    /// Reject blocks with text after their options instead of dropping it
    pub strict: bool,
    /// Prefix of generated question labels
    pub label_prefix: String,
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            bank_dir: PathBuf::from("quiz-banks"),
            extension: QUIZ_BANK_EXTENSION.to_string(),
            strict: false,
            label_prefix: "Question".to_string(),
        }
    }
}

impl QuizbankConfig {
    /// Load config from quizbank.toml, defaulting when the file is absent
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: QuizbankConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn bank_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.bank_dir)
    }
}

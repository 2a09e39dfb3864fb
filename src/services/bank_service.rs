//! Bank service - locating, reading and compiling quiz bank files

use crate::compiler::{compile_quiz_bank, CompileOptions};
use crate::models::{CompiledQuiz, QuizbankConfig};
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A compiled bank together with the file it came from
#[derive(Debug, Clone)]
pub struct BankReport {
    pub path: PathBuf,
    pub quiz: CompiledQuiz,
}

/// Find quiz bank files under the configured bank directory, sorted by path
pub fn find_quiz_banks(project_root: &Path, config: &QuizbankConfig) -> Result<Vec<PathBuf>> {
    let bank_root = config.bank_root(project_root);
    if !bank_root.exists() {
        anyhow::bail!("Quiz bank directory not found: {}", bank_root.display());
    }

    let mut banks = Vec::new();
    for entry in WalkDir::new(&bank_root).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", bank_root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_bank = entry
            .file_name()
            .to_string_lossy()
            .ends_with(config.extension.as_str());
        if is_bank {
            banks.push(entry.into_path());
        }
    }

    banks.sort();
    Ok(banks)
}

/// Read and compile one quiz bank file
pub fn compile_bank_file(path: &Path, options: &CompileOptions) -> Result<CompiledQuiz> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read quiz bank {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(compile_quiz_bank(&source, &file_name, options))
}

/// Compile every bank under the project, in path order
pub fn compile_all(
    project_root: &Path,
    config: &QuizbankConfig,
    options: &CompileOptions,
) -> Result<Vec<BankReport>> {
    find_quiz_banks(project_root, config)?
        .into_iter()
        .map(|path| {
            let quiz = compile_bank_file(&path, options)?;
            Ok(BankReport { path, quiz })
        })
        .collect()
}

/// Write a compiled quiz as pretty JSON
pub fn write_compiled(quiz: &CompiledQuiz, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(quiz)?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

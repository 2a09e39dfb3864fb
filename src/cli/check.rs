//! Check CLI command - compile every bank and report

use crate::compiler::CompileOptions;
use crate::models::QuizbankConfig;
use crate::parser::ParseMode;
use crate::services::bank_service;
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Directory holding quiz banks (defaults to bank_dir from quizbank.toml)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Reject blocks with text after their answer options
    #[arg(long)]
    pub strict: bool,
}

/// Returns whether every block of every bank compiled
pub fn run(args: CheckArgs) -> Result<bool> {
    let project_root = env::current_dir()?;
    let mut config = QuizbankConfig::load(&project_root)?;
    if let Some(dir) = args.dir {
        config.bank_dir = dir;
    }

    let mut options = CompileOptions::from(&config);
    if args.strict {
        options.mode = ParseMode::Strict;
    }

    println!("{}", "🔍 Checking quiz banks...".cyan());

    let reports = bank_service::compile_all(&project_root, &config, &options)?;
    if reports.is_empty() {
        println!(
            "{}",
            format!(
                "No '*{}' files found in {}",
                config.extension,
                config.bank_dir.display()
            )
            .yellow()
        );
        return Ok(true);
    }

    let mut rejected_total = 0;
    for report in &reports {
        println!();
        super::compile::print_summary(&report.path, &report.quiz);
        rejected_total += report.quiz.rejected.len();
    }

    let question_total: usize = reports.iter().map(|r| r.quiz.questions.len()).sum();
    println!();
    if rejected_total == 0 {
        println!(
            "{}",
            format!("✅ {} banks, {} questions", reports.len(), question_total).green()
        );
    } else {
        println!(
            "{}",
            format!(
                "⚠️  {} banks, {} questions, {} rejected blocks",
                reports.len(),
                question_total,
                rejected_total
            )
            .yellow()
        );
    }

    Ok(rejected_total == 0)
}

//! Compile CLI command

use crate::compiler::CompileOptions;
use crate::models::{CompiledQuiz, QuestionKind, QuizbankConfig};
use crate::parser::ParseMode;
use crate::services::bank_service;
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

#[derive(Args)]
pub struct CompileArgs {
    /// Quiz bank file to compile
    pub file: PathBuf,

    /// Reject blocks with text after their answer options
    #[arg(long)]
    pub strict: bool,

    /// Print the compiled quiz as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Write the compiled quiz as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only emit questions of this kind (e.g. "essay", "true_false")
    #[arg(short, long)]
    pub kind: Option<String>,
}

pub fn run(args: CompileArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = QuizbankConfig::load(&project_root)?;

    let kind_filter = args
        .kind
        .as_deref()
        .map(str::parse::<QuestionKind>)
        .transpose()?;

    let mut options = CompileOptions::from(&config);
    if args.strict {
        options.mode = ParseMode::Strict;
    }

    let mut quiz = bank_service::compile_bank_file(&args.file, &options)?;
    if let Some(kind) = kind_filter {
        quiz.questions.retain(|q| q.kind == kind);
    }

    if let Some(output) = &args.output {
        bank_service::write_compiled(&quiz, output)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quiz)?);
    } else {
        print_summary(&args.file, &quiz);
        if let Some(output) = &args.output {
            println!("{}", format!("✅ Wrote {}", output.display()).green());
        }
    }

    Ok(())
}

pub(crate) fn print_summary(path: &std::path::Path, quiz: &CompiledQuiz) {
    println!(
        "{}",
        format!("📝 {} ({})", quiz.settings.title, path.display()).cyan().bold()
    );
    println!(
        "   Questions: {}",
        quiz.questions.len().to_string().green()
    );
    for (kind, count) in quiz.kind_counts() {
        println!("     • {:<17} {}", kind.tag(), count);
    }
    if quiz.is_empty() {
        println!("   {}", "No questions compiled".yellow());
    }
    if !quiz.rejected.is_empty() {
        println!(
            "   Rejected:  {}",
            quiz.rejected.len().to_string().red()
        );
        for rejected in &quiz.rejected {
            println!(
                "     {} line {} [{}]: {}",
                "✗".red(),
                rejected.line,
                rejected.category.name(),
                rejected.reason
            );
        }
    }
}

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use quizbank::cli::{CheckArgs, CompileArgs};
use quizbank::Result;
use std::io;

#[derive(Parser)]
#[command(name = "quizbank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile shorthand quiz banks into quiz question payloads", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log classification and dropped lines
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a single quiz bank file
    Compile(CompileArgs),

    /// Compile every quiz bank in the project and report rejected blocks
    Check(CheckArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Compile(args) => {
            quizbank::cli::compile::run(args)?;
            Ok(true)
        }

        Commands::Check(args) => quizbank::cli::check::run(args),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "quizbank", &mut io::stdout());
            Ok(true)
        }
    }
}

//! Service layer for quizbank
//!
//! File-system access around the pure compiler, shared by the CLI commands.

pub mod bank_service;

pub use bank_service::{compile_all, compile_bank_file, find_quiz_banks, write_compiled, BankReport};

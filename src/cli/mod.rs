pub mod check;
pub mod compile;

pub use check::CheckArgs;
pub use compile::CompileArgs;

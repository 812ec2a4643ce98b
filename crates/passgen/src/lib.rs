//! Command line password generator.

/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "passgen";

pub mod cli;
mod error;
pub mod output;
pub mod settings;

pub use error::Error;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, error::Error>;

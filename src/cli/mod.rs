//! CLI module
//!
//! Provides:
//! - Argument parsing
//! - Database path resolution (flag → env → executable-relative default)
//! - Report dispatch and exit codes

pub mod args;
pub mod db_path;
pub mod dispatch;

// Re-exports
pub use args::{parse_args, Args};
pub use db_path::resolve_db_path;
pub use dispatch::{run, ExitCode};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes (deterministic)
///
/// Query failures never change the exit status; a run that printed an error
/// to stderr still exits 0. Only argument errors exit non-zero.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

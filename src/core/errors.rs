/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduling simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(scheduler::invalid_argument),
        help("Check the descriptor path, the algorithm code and the quantum.")
    )]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(scheduler::io_error),
        help("The descriptor file could not be opened or written. Check the path and permissions.")
    )]
    Io(String),

    #[error("Corrupt descriptor data: {0}")]
    #[diagnostic(
        code(scheduler::corrupt_data),
        help("The file is shorter than its declared record count implies. Regenerate it.")
    )]
    CorruptData(String),
}

impl SchedulerError {
    /// Short machine-readable name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Io(_) => "io_error",
            Self::CorruptData(_) => "corrupt_data",
        }
    }
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for SchedulerError {
    fn from(err: std::io::Error) -> Self {
        SchedulerError::Io(err.to_string())
    }
}

/// Result type for simulator operations
pub type SchedResult<T> = std::result::Result<T, SchedulerError>;

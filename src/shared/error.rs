use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated and presented
    Success = 0,
    /// Application error (fetch error, malformed date, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while building an obsolescence report.
///
/// The pure pipeline only ever produces `MalformedDate` and
/// `InvalidDateWindow`; the other variants come from the boundaries.
#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("Failed to fetch the IT component catalog from {source_name}\nDetails: {details}\n\n💡 Hint: Please verify the workspace URL, the API token and your network connection")]
    Fetch {
        source_name: String,
        details: String,
    },

    #[error("Malformed date '{value}' ({context})\n\n💡 Hint: Dates must use the YYYY-MM-DD format")]
    MalformedDate { value: String, context: String },

    #[error("Invalid date window: start date {start} is after end date {end}\n\n💡 Hint: Please choose a start date on or before the end date")]
    InvalidDateWindow { start: String, end: String },

    #[error("Failed to render the {artifact}\nDetails: {details}")]
    Render { artifact: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    /// Validation error for configuration and requests
    #[error("Validation error: {message}")]
    Validation { message: String },
}

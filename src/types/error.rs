//! Error types for the commandlines library
//!
//! Classification itself never fails: absent tokens, switches and definitions
//! are reported as empty strings or `false`. The errors here only cover the
//! edges that touch the outside world.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: token file not found, unreadable, output not writable
//! - **Report Errors**: CSV serialization of a classification report failed

use thiserror::Error;

/// Main error type for the commandlines library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// Token file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading tokens or writing a report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A classification report could not be serialized
    #[error("Report error: {message}")]
    ReportError {
        /// Description of the serialization failure
        message: String,
    },
}

impl From<std::io::Error> for CommandError {
    fn from(error: std::io::Error) -> Self {
        CommandError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for CommandError {
    fn from(error: csv::Error) -> Self {
        CommandError::ReportError {
            message: error.to_string(),
        }
    }
}

impl CommandError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        CommandError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ReportError error
    pub fn report_error(message: &str) -> Self {
        CommandError::ReportError {
            message: message.to_string(),
        }
    }
}

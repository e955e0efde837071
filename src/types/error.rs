//! Error types for the Investment Calculator
//!
//! This module defines all error types that can occur while gathering inputs
//! and writing the investment summary. The projection itself never fails:
//! every floating-point input, including NaN and infinity, flows through
//! the arithmetic unchanged.
//!
//! # Error Categories
//!
//! - **Resource Errors**: The summary file cannot be opened for writing
//! - **Input Errors**: A prompt answer is not a number, or input ended early
//! - **Output Errors**: A sink write or the CSV export failed

use thiserror::Error;

/// Main error type for the investment calculator
///
/// Every variant is fatal for the session: the binary reports it on stderr
/// and exits with status 1.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The output file could not be opened for writing
    ///
    /// Raised before any table is produced, so no partial output exists.
    #[error("Could not open {path} for writing.")]
    ResourceUnavailable {
        /// The path that could not be opened
        path: String,
        /// Underlying I/O error description
        message: String,
    },

    /// A prompt answer could not be converted to a number
    ///
    /// Only the type conversion is checked. Negative or zero values are
    /// accepted and flow through the projection.
    #[error("Invalid {field} '{value}': expected a number")]
    InvalidInput {
        /// Which input was being read
        field: String,
        /// The text that failed to parse
        value: String,
    },

    /// Standard input ended before a prompt was answered
    #[error("Input ended before {field} was entered")]
    InputClosed {
        /// Which input was being read
        field: String,
    },

    /// I/O error occurred while writing to a sink or the console
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The CSV export of projected rows failed
    #[error("CSV export error: {message}")]
    CsvExport {
        /// Description of the CSV error
        message: String,
    },
}

impl From<std::io::Error> for ProjectionError {
    fn from(error: std::io::Error) -> Self {
        ProjectionError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ProjectionError {
    fn from(error: csv::Error) -> Self {
        ProjectionError::CsvExport {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ProjectionError {
    /// Create a ResourceUnavailable error
    pub fn resource_unavailable(path: &str, error: &std::io::Error) -> Self {
        ProjectionError::ResourceUnavailable {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, value: &str) -> Self {
        ProjectionError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an InputClosed error
    pub fn input_closed(field: &str) -> Self {
        ProjectionError::InputClosed {
            field: field.to_string(),
        }
    }
}

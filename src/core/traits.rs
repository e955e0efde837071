//! Core traits for output destinations
//!
//! This module defines the trait abstraction that lets the projection engine
//! write its table without knowing how many destinations exist or what they
//! are (terminal, file, in-memory buffer).

use crate::types::ProjectionError;

/// Trait for a destination that receives emitted text lines
///
/// Lines are passed without a trailing newline; the sink is responsible for
/// terminating each one.
pub trait Sink {
    /// Short name used in log messages and error reports
    fn name(&self) -> &str;

    /// Write a single line
    fn write_line(&mut self, line: &str) -> Result<(), ProjectionError>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<(), ProjectionError> {
        Ok(())
    }
}

//! Line sinks and the fan-out set the engine writes through
//!
//! # Components
//!
//! - `WriterSink` - A sink over any `std::io::Write` (terminal, file, buffer)
//! - `SinkSet` - Writes every line to each of its sinks, in order
//!
//! Sinks in a set are independent: when one fails, the failure is logged
//! and recorded, that sink receives nothing further, and the remaining
//! sinks keep receiving lines. Failures surface from [`SinkSet::finish`].

use crate::core::traits::Sink;
use crate::types::ProjectionError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sink writing newline-terminated lines to a writer
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    name: String,
    writer: W,
}

/// Sink backed by a buffered output file
pub type FileSink = WriterSink<BufWriter<File>>;

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(name: &str, writer: W) -> Self {
        WriterSink {
            name: name.to_string(),
            writer,
        }
    }
}

impl FileSink {
    /// Create (or truncate) the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the file cannot be opened for writing.
    /// The file handle is closed when the sink is dropped.
    pub fn create(path: &Path) -> Result<Self, ProjectionError> {
        let display = path.display().to_string();
        let file = File::create(path)
            .map_err(|e| ProjectionError::resource_unavailable(&display, &e))?;

        log::debug!("Opened {} for writing", display);
        Ok(WriterSink::new(&display, BufWriter::new(file)))
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&mut self, line: &str) -> Result<(), ProjectionError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ProjectionError> {
        self.writer.flush()?;
        Ok(())
    }
}

struct SinkSlot<'a> {
    sink: Box<dyn Sink + 'a>,
    failure: Option<ProjectionError>,
}

/// Ordered set of sinks receiving identical lines
#[derive(Default)]
pub struct SinkSet<'a> {
    slots: Vec<SinkSlot<'a>>,
}

impl<'a> SinkSet<'a> {
    /// Create an empty set
    pub fn new() -> Self {
        SinkSet { slots: Vec::new() }
    }

    /// Add a sink; it receives lines after the sinks already added
    pub fn push<S: Sink + 'a>(&mut self, sink: S) {
        self.slots.push(SinkSlot {
            sink: Box::new(sink),
            failure: None,
        });
    }

    /// Number of sinks in the set
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the set has no sinks
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Write a line to every sink that has not failed
    pub fn write_line(&mut self, line: &str) {
        for slot in self.slots.iter_mut().filter(|s| s.failure.is_none()) {
            if let Err(e) = slot.sink.write_line(line) {
                log::warn!("Sink '{}' failed, skipping it from now on: {}", slot.sink.name(), e);
                slot.failure = Some(e);
            }
        }
    }

    /// Flush every sink and report the first failure, if any
    ///
    /// All sinks are flushed even when an earlier one has failed. Sinks are
    /// dropped (and files closed) when this returns.
    pub fn finish(mut self) -> Result<(), ProjectionError> {
        let mut first_failure = None;

        for slot in self.slots.iter_mut() {
            if slot.failure.is_none() {
                if let Err(e) = slot.sink.flush() {
                    log::warn!("Flushing sink '{}' failed: {}", slot.sink.name(), e);
                    slot.failure = Some(e);
                }
            }
            if first_failure.is_none() {
                first_failure = slot.failure.take();
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

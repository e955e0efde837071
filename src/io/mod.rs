//! I/O module
//!
//! Handles table formatting and output destinations.
//!
//! # Components
//!
//! - `table` - Summary table line formatting (header, separator, rows)
//! - `sink` - Line sinks and the fan-out set the engine writes through
//! - `csv_format` - CSV export of projected rows

pub mod csv_format;
pub mod sink;
pub mod table;

pub use csv_format::write_rows_csv;
pub use sink::{FileSink, SinkSet, WriterSink};

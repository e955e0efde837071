//! CSV export of projected rows
//!
//! Writes every row of every scenario as one CSV table, with amounts kept to
//! the same two decimal places as the text summary. This is a machine-readable
//! companion to the summary file, not a replacement for it.

use crate::types::{ProjectionError, Scenario, YearRow};
use serde::Serialize;
use std::io::Write;

/// Column names of the export, in order
pub const CSV_HEADER: [&str; 6] = [
    "scenario",
    "year",
    "opening_balance",
    "deposited_amount",
    "interest_earned",
    "closing_balance",
];

/// One serialized export record
#[derive(Debug, Serialize, PartialEq)]
struct CsvRow {
    scenario: &'static str,
    year: i32,
    opening_balance: String,
    deposited_amount: String,
    interest_earned: String,
    closing_balance: String,
}

impl CsvRow {
    fn new(scenario: Scenario, row: &YearRow) -> Self {
        CsvRow {
            scenario: scenario.key(),
            year: row.year,
            opening_balance: format!("{:.2}", row.opening_balance),
            deposited_amount: format!("{:.2}", row.deposited_amount),
            interest_earned: format!("{:.2}", row.interest_earned),
            closing_balance: format!("{:.2}", row.closing_balance),
        }
    }
}

/// Write projected rows to CSV format
///
/// The header is always written, so a run with zero years still produces a
/// valid (empty) table.
///
/// # Arguments
///
/// * `scenarios` - Each scenario with the rows it produced, in report order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ProjectionError::CsvExport)` if a write error occurred
pub fn write_rows_csv(
    scenarios: &[(Scenario, Vec<YearRow>)],
    output: &mut dyn Write,
) -> Result<(), ProjectionError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for (scenario, rows) in scenarios {
        for row in rows {
            writer.serialize(CsvRow::new(*scenario, row))?;
        }
    }

    writer.flush().map_err(|e| ProjectionError::CsvExport {
        message: format!("Failed to flush output: {}", e),
    })?;

    Ok(())
}

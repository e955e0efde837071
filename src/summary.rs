//! Investment summary session
//!
//! This module orchestrates one complete run of the calculator:
//! 1. Opens the summary file (before anything is asked, so an unwritable
//!    path fails fast without partial output)
//! 2. Greets the user and collects any inputs not given as flags
//! 3. Projects both scenarios, writing every line to the terminal and the
//!    summary file in lockstep
//! 4. Optionally exports all rows as CSV
//! 5. Prints the closing message
//!
//! The projection logic lives in [`crate::core`]; this module only wires
//! inputs, sinks and scenarios together.

use crate::cli::{CliArgs, Prompter};
use crate::core::ProjectionEngine;
use crate::io::{write_rows_csv, FileSink, SinkSet, WriterSink};
use crate::types::{InvestmentInputs, ProjectionError, Scenario, YearRow};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};

/// Summary file written when `--output` is not given
pub const DEFAULT_OUTPUT_FILE: &str = "InvestmentSummary.txt";

const GREETING: &str = "Welcome to the Airgead Banking Investment Calculator!";
const GREETING_RULE_WIDTH: usize = 52;

/// Outcome of a completed session
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// The inputs the session ran with
    pub inputs: InvestmentInputs,
    /// Each scenario with the rows it produced, in report order
    pub scenarios: Vec<(Scenario, Vec<YearRow>)>,
}

impl SummaryReport {
    /// Rows produced for one scenario
    pub fn rows(&self, scenario: Scenario) -> &[YearRow] {
        self.scenarios
            .iter()
            .find(|(s, _)| *s == scenario)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[])
    }
}

/// Run a full calculator session
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `input` - Source of prompted answers (stdin in the binary)
/// * `console` - Terminal output for the greeting, prompts, tables and closing message
///
/// # Errors
///
/// - `ResourceUnavailable` if the summary file cannot be opened; nothing else
///   is written in that case
/// - `InvalidInput` / `InputClosed` if a prompted answer cannot be read
/// - `IoError` if a sink fails while the tables are written; the other sinks
///   still receive every line
/// - `CsvExport` if the CSV export cannot be written
pub fn run<R: BufRead>(
    args: &CliArgs,
    input: R,
    console: &mut dyn Write,
) -> Result<SummaryReport, ProjectionError> {
    let file_sink = FileSink::create(&args.output_file)?;

    if !args.quiet {
        writeln!(console, "{}", GREETING)?;
        writeln!(console, "{}", "-".repeat(GREETING_RULE_WIDTH))?;
    }

    let inputs = Prompter::new(input, &mut *console).collect_inputs(args)?;
    log::info!(
        "Projecting {} years: initial {}, monthly deposit {}, rate {}%",
        inputs.number_of_years,
        inputs.initial_investment,
        inputs.monthly_deposit,
        inputs.annual_interest_rate_percent
    );

    if !args.quiet {
        writeln!(console)?;
    }

    let scenarios = {
        let mut sinks = SinkSet::new();
        if !args.quiet {
            sinks.push(WriterSink::new("terminal", &mut *console));
        }
        sinks.push(file_sink);

        let scenarios = write_scenarios(&inputs, &mut sinks);
        sinks.finish()?;
        scenarios
    };

    if let Some(csv_path) = &args.csv_file {
        let csv_display = csv_path.display().to_string();
        let file = File::create(csv_path)
            .map_err(|e| ProjectionError::resource_unavailable(&csv_display, &e))?;
        let mut writer = BufWriter::new(file);
        write_rows_csv(&scenarios, &mut writer)?;
        log::info!("Exported rows to {}", csv_path.display());
    }

    if !args.quiet {
        writeln!(console, "Thank you for using the Investment Calculator!")?;
        writeln!(
            console,
            "Detailed results have also been saved to {}.",
            args.output_file.display()
        )?;
    }
    console.flush()?;

    Ok(SummaryReport { inputs, scenarios })
}

/// Write every scenario, label first, to the sink set
///
/// Each scenario is an independent run from the same initial investment.
pub fn write_scenarios(
    inputs: &InvestmentInputs,
    sinks: &mut SinkSet<'_>,
) -> Vec<(Scenario, Vec<YearRow>)> {
    Scenario::ALL
        .iter()
        .map(|&scenario| {
            log::debug!("Starting scenario {}", scenario.key());
            sinks.write_line(scenario.label());
            let rows = ProjectionEngine::new(inputs.scenario(scenario)).emit(sinks);
            (scenario, rows)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn args_with(output: &std::path::Path, extra: &[&str]) -> CliArgs {
        let mut argv = vec!["program", "--output", output.to_str().unwrap()];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_with_prompted_inputs() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("InvestmentSummary.txt");
        let args = args_with(&path, &[]);
        let mut console = Vec::new();

        let report = run(&args, Cursor::new("1000\n50\n5\n2\n"), &mut console).unwrap();

        assert_eq!(report.inputs.number_of_years, 2);
        assert_eq!(report.rows(Scenario::NoMonthlyDeposits).len(), 2);
        assert_eq!(report.rows(Scenario::WithMonthlyDeposits).len(), 2);

        let console = String::from_utf8(console).unwrap();
        assert!(console.starts_with(
            "Welcome to the Airgead Banking Investment Calculator!\n\
             ----------------------------------------------------\n\
             Enter initial investment amount (e.g., 1000.00): $"
        ));
        assert!(console.contains("Enter number of years to invest: \n--- Investment Summary"));
        assert!(console.ends_with(&format!(
            "Thank you for using the Investment Calculator!\n\
             Detailed results have also been saved to {}.\n",
            path.display()
        )));
    }

    #[test]
    fn test_terminal_and_file_receive_identical_tables() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("summary.txt");
        let args = args_with(
            &path,
            &["--initial", "1000", "--deposit", "50", "--rate", "5", "--years", "5"],
        );
        let mut console = Vec::new();

        run(&args, Cursor::new(""), &mut console).unwrap();

        let console = String::from_utf8(console).unwrap();
        let file = fs::read_to_string(&path).unwrap();
        assert!(file.starts_with("--- Investment Summary (No Monthly Deposits) ---\n"));
        assert!(console.contains(&file));
    }

    #[test]
    fn test_scenarios_start_from_same_investment() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("summary.txt");
        let args = args_with(
            &path,
            &["--initial", "1000", "--deposit", "50", "--rate", "5", "--years", "3", "-q"],
        );

        let report = run(&args, Cursor::new(""), &mut Vec::new()).unwrap();

        let no_deposits = report.rows(Scenario::NoMonthlyDeposits);
        let with_deposits = report.rows(Scenario::WithMonthlyDeposits);
        assert_eq!(no_deposits[0].opening_balance, 1000.0);
        assert_eq!(with_deposits[0].opening_balance, 1000.0);
        assert!(no_deposits.iter().all(|row| row.deposited_amount == 0.0));
        assert!(with_deposits.iter().all(|row| row.deposited_amount == 600.0));
    }

    #[test]
    fn test_quiet_writes_only_the_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("summary.txt");
        let args = args_with(
            &path,
            &["--initial", "1000", "--deposit", "50", "--rate", "5", "--years", "1", "--quiet"],
        );
        let mut console = Vec::new();

        run(&args, Cursor::new(""), &mut console).unwrap();

        assert!(console.is_empty());
        assert!(fs::read_to_string(&path).unwrap().contains("1665.10"));
    }

    #[test]
    fn test_unopenable_output_fails_before_prompting() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("no_such_dir").join("summary.txt");
        let args = args_with(&path, &[]);
        let mut console = Vec::new();

        let result = run(&args, Cursor::new("1000 50 5 10\n"), &mut console);

        assert!(matches!(
            result,
            Err(ProjectionError::ResourceUnavailable { .. })
        ));
        assert!(console.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_prompt_answer_is_reported() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("summary.txt");
        let args = args_with(&path, &[]);

        let result = run(&args, Cursor::new("1000 fifty\n"), &mut Vec::new());

        assert_eq!(
            result,
            Err(ProjectionError::invalid_input("monthly deposit amount", "fifty"))
        );
    }

    #[test]
    fn test_csv_export_contains_both_scenarios() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("summary.txt");
        let csv_path = dir.path().join("rows.csv");
        let args = args_with(
            &path,
            &[
                "--initial", "1000", "--deposit", "50", "--rate", "5", "--years", "1",
                "--csv", csv_path.to_str().unwrap(), "-q",
            ],
        );

        run(&args, Cursor::new(""), &mut Vec::new()).unwrap();

        assert_eq!(
            fs::read_to_string(&csv_path).unwrap(),
            "scenario,year,opening_balance,deposited_amount,interest_earned,closing_balance\n\
             no_deposits,1,1000.00,0.00,51.16,1051.16\n\
             with_deposits,1,1000.00,600.00,65.10,1665.10\n"
        );
    }

    #[test]
    fn test_write_scenarios_labels_each_table() {
        let inputs = InvestmentInputs {
            initial_investment: 1000.0,
            monthly_deposit: 50.0,
            annual_interest_rate_percent: 5.0,
            number_of_years: 0,
        };
        let mut buffer = Vec::new();

        {
            let mut sinks = SinkSet::new();
            sinks.push(WriterSink::new("buffer", &mut buffer));
            let scenarios = write_scenarios(&inputs, &mut sinks);
            sinks.finish().unwrap();
            assert!(scenarios.iter().all(|(_, rows)| rows.is_empty()));
        }

        let header = crate::io::table::HEADER;
        let rule = "-".repeat(80);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            format!(
                "--- Investment Summary (No Monthly Deposits) ---\n{header}\n{rule}\n\n\
                 --- Investment Summary (With Monthly Deposits) ---\n{header}\n{rule}\n\n"
            )
        );
    }
}

use crate::cli::prompt::parse_amount;
use crate::summary::DEFAULT_OUTPUT_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Project compound-interest growth with and without monthly deposits
///
/// Any of the four inputs left off the command line is prompted for
/// interactively.
#[derive(Parser, Debug, Clone)]
#[command(name = "investment-calculator")]
#[command(
    about = "Project compound-interest growth with and without monthly deposits",
    long_about = None
)]
pub struct CliArgs {
    /// Starting balance
    #[arg(
        long = "initial",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        value_parser = finite_amount,
        help = "Initial investment amount (prompted for when omitted)"
    )]
    pub initial_investment: Option<f64>,

    /// Amount deposited every month in the with-deposits scenario
    #[arg(
        long = "deposit",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        value_parser = finite_amount,
        help = "Monthly deposit amount (prompted for when omitted)"
    )]
    pub monthly_deposit: Option<f64>,

    /// Annual interest rate as a percentage number
    #[arg(
        long = "rate",
        value_name = "PERCENT",
        allow_negative_numbers = true,
        value_parser = finite_amount,
        help = "Annual interest rate, e.g. 5 for 5% (prompted for when omitted)"
    )]
    pub annual_interest_rate: Option<f64>,

    /// Number of years to project
    #[arg(
        long = "years",
        value_name = "YEARS",
        allow_negative_numbers = true,
        help = "Number of years to invest (prompted for when omitted)"
    )]
    pub number_of_years: Option<i32>,

    /// Summary file receiving the same tables as the terminal
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Summary file, truncated on every run"
    )]
    pub output_file: PathBuf,

    /// Optional CSV export of every projected row
    #[arg(
        long = "csv",
        value_name = "PATH",
        help = "Also write every projected row to a CSV file"
    )]
    pub csv_file: Option<PathBuf>,

    /// Suppress terminal output other than prompts
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only write the summary file; prompts are still shown when needed"
    )]
    pub quiet: bool,
}

fn finite_amount(text: &str) -> Result<f64, String> {
    parse_amount(text).ok_or_else(|| format!("'{}' is not a finite number", text))
}

//! Investment Calculator CLI
//!
//! Projects compound-interest growth of an investment, with and without
//! monthly deposits, printing a year-by-year table to the terminal and to a
//! summary file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --initial 1000 --deposit 50 --rate 5 --years 10
//! cargo run -- --output summary.txt --csv rows.csv
//! RUST_LOG=debug cargo run
//! ```
//!
//! Inputs not given as flags are prompted for on the terminal. The summary
//! file (`InvestmentSummary.txt` by default) is truncated on every run.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (summary file cannot be opened, unreadable input, write failure)

use investment_calculator::cli;
use investment_calculator::summary;
use std::process;

fn main() {
    env_logger::init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(e) = summary::run(&args, stdin.lock(), &mut stdout) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

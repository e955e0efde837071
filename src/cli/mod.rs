// CLI module
// Command-line arguments and interactive prompting

mod args;
pub mod prompt;

pub use args::CliArgs;
pub use prompt::Prompter;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., a non-numeric flag value or --help), clap
/// displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

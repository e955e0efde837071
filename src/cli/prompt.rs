//! Interactive prompting for projection inputs
//!
//! Answers are read as whitespace-separated tokens, so a user may answer
//! one prompt per line or type all four values on a single line.
//! Only the numeric conversion is checked: negative amounts, negative rates
//! and non-positive year counts are passed through unchanged. Non-finite
//! words (`nan`, `inf`, `infinity`) are not numbers here.

use crate::cli::CliArgs;
use crate::types::{InvestmentInputs, ProjectionError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Parse a finite decimal number
///
/// Rejects `nan`, `inf` and `infinity` (in any case), which `f64::from_str`
/// would otherwise accept.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Numeric types a prompt answer can be read as
pub trait Answer: Sized {
    fn parse_answer(text: &str) -> Option<Self>;
}

impl Answer for f64 {
    fn parse_answer(text: &str) -> Option<Self> {
        parse_amount(text)
    }
}

impl Answer for i32 {
    fn parse_answer(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

/// A single prompted input
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Name used in error messages
    pub field: &'static str,
    /// Text written before reading the answer (no trailing newline)
    pub prompt: &'static str,
}

pub const INITIAL_INVESTMENT: Question = Question {
    field: "initial investment amount",
    prompt: "Enter initial investment amount (e.g., 1000.00): $",
};

pub const MONTHLY_DEPOSIT: Question = Question {
    field: "monthly deposit amount",
    prompt: "Enter monthly deposit amount (e.g., 50.00): $",
};

pub const ANNUAL_INTEREST_RATE: Question = Question {
    field: "annual interest rate",
    prompt: "Enter annual interest rate (e.g., 5 for 5%): ",
};

pub const NUMBER_OF_YEARS: Question = Question {
    field: "number of years",
    prompt: "Enter number of years to invest: ",
};

/// Reads prompted answers from an input stream
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading answers from `input` and writing prompts to `output`
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Fill in every input not already supplied as a flag
    ///
    /// Prompts are asked in a fixed order: initial investment, monthly
    /// deposit, annual rate, number of years.
    pub fn collect_inputs(&mut self, args: &CliArgs) -> Result<InvestmentInputs, ProjectionError> {
        let initial_investment = self.resolve(args.initial_investment, INITIAL_INVESTMENT)?;
        let monthly_deposit = self.resolve(args.monthly_deposit, MONTHLY_DEPOSIT)?;
        let annual_interest_rate_percent =
            self.resolve(args.annual_interest_rate, ANNUAL_INTEREST_RATE)?;
        let number_of_years = self.resolve(args.number_of_years, NUMBER_OF_YEARS)?;

        Ok(InvestmentInputs {
            initial_investment,
            monthly_deposit,
            annual_interest_rate_percent,
            number_of_years,
        })
    }

    fn resolve<T: Answer>(
        &mut self,
        provided: Option<T>,
        question: Question,
    ) -> Result<T, ProjectionError> {
        match provided {
            Some(value) => Ok(value),
            None => self.ask(question),
        }
    }

    /// Write the prompt and parse the next answer
    ///
    /// # Errors
    ///
    /// - `InputClosed` if the input ends before an answer is given
    /// - `InvalidInput` if the answer is not a valid number of type `T`
    pub fn ask<T: Answer>(&mut self, question: Question) -> Result<T, ProjectionError> {
        write!(self.output, "{}", question.prompt)?;
        self.output.flush()?;

        let token = self.next_token(question.field)?;
        T::parse_answer(&token).ok_or_else(|| {
            log::debug!("Rejected {} answer '{}'", question.field, token);
            ProjectionError::invalid_input(question.field, &token)
        })
    }

    fn next_token(&mut self, field: &str) -> Result<String, ProjectionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ProjectionError::input_closed(field));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

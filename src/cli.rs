//! Command-line arguments and the parse, validate, compute, print pipeline.

use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use std::io::{self, Write};

use crate::constants::INVALID_INPUT_MESSAGE;
use crate::error::Result;
use crate::loan::{self, Outcome};
use crate::query::LoanQuery;

/// Annuity and differentiated loan calculator
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Monthly payment amount
    #[arg(long, allow_negative_numbers = true)]
    pub payment: Option<f64>,

    /// Loan principal
    #[arg(long, allow_negative_numbers = true)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent, e.g. 7.8
    #[arg(long, allow_negative_numbers = true)]
    pub interest: Option<f64>,

    /// Number of monthly payments
    #[arg(long, allow_negative_numbers = true)]
    pub periods: Option<i64>,

    /// Loan type: annuity or diff
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Raise log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Number of loan flags given on the command line, `--type` included.
    pub fn supplied(&self) -> usize {
        [
            self.payment.is_some(),
            self.principal.is_some(),
            self.interest.is_some(),
            self.periods.is_some(),
            self.kind.is_some(),
        ]
        .into_iter()
        .filter(|given| *given)
        .count()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Validate and solve the query described by `args`.
pub fn answer(args: &Args) -> Result<Outcome> {
    let query = LoanQuery::try_from(args)?;
    loan::calculate(&query)
}

/// Write the answer, or the invalid-input message, to `out`.
///
/// Returns `Ok(false)` when the query was rejected so the caller can pick an
/// exit status.
pub fn run<W: Write>(args: &Args, out: &mut W) -> io::Result<bool> {
    match answer(args) {
        Ok(outcome) => {
            writeln!(out, "{}", outcome)?;
            Ok(true)
        }
        Err(e) => {
            info!("{}", e);
            writeln!(out, "{}", INVALID_INPUT_MESSAGE)?;
            Ok(false)
        }
    }
}

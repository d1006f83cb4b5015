//! Human-readable rendering of calculator results.

use std::fmt;

use crate::constants::MONTHS_PER_YEAR;
use crate::loan::{DiffPayment, Outcome};

/// Spell out a repayment term, e.g. `2 years and 3 months`.
///
/// Anything at or below one period reads as `1 month`.
pub fn format_term(periods: i64) -> String {
    if periods <= 1 {
        return "1 month".to_string();
    }
    if periods < MONTHS_PER_YEAR {
        return format!("{} months", periods);
    }

    let years = periods / MONTHS_PER_YEAR;
    let months = periods % MONTHS_PER_YEAR;
    let years = if years == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", years)
    };
    match months {
        0 => years,
        1 => format!("{} and 1 month", years),
        m => format!("{} and {} months", years, m),
    }
}

impl fmt::Display for DiffPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Month {}: payment is {:.0}", self.month, self.amount)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Payment(s) => {
                writeln!(f, "Your monthly payment = {}!", s.value)?;
                write!(f, "Overpayment = {}", s.overpayment)
            }
            Outcome::Principal(s) => {
                writeln!(f, "Your loan principal = {}!", s.value)?;
                write!(f, "Overpayment = {}", s.overpayment)
            }
            Outcome::Periods(s) => {
                writeln!(f, "It will take {} to repay this loan!", format_term(s.value))?;
                write!(f, "Overpayment = {}", s.overpayment)
            }
            Outcome::Differentiated(schedule) => {
                // one pass: each line is written as soon as it is computed
                let mut total = 0.;
                for pmt in schedule.payments() {
                    writeln!(f, "{}", pmt)?;
                    total += pmt.amount;
                }
                write!(f, "Overpayment = {}", total - schedule.principal())
            }
        }
    }
}

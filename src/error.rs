use thiserror::Error;

/// Everything that can make a loan query unanswerable.
///
/// The command line collapses all of these into a single
/// "Incorrect parameters" line; the variants exist so the reason can be logged
/// and tested.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    #[error("interest rate must be greater than zero")]
    InvalidRate,

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("unknown loan type: {0}")]
    UnknownScheme(String),

    #[error("{scheme} loan needs at least {required} parameters, got {supplied}")]
    MissingArguments {
        scheme: &'static str,
        supplied: usize,
        required: usize,
    },

    #[error("payment cannot be given for a differentiated loan")]
    PaymentGiven,

    #[error("annuity loan needs exactly one unknown among payment, principal and periods, got {count}")]
    Unknowns { count: usize },

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("number of periods {0} is out of range")]
    PeriodsOutOfRange(i64),

    #[error("payment does not cover the monthly interest")]
    PaymentBelowInterest,

    #[error("{operation} produced a non-finite result")]
    NonFinite { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, LoanError>;

use log::debug;
use std::{fmt, str::FromStr};

use crate::cli::Args;
use crate::constants::{ANNUITY_MIN_FLAGS, DIFF_MIN_FLAGS, RATE_DIVISOR};
use crate::error::{LoanError, Result};

/// Amortization scheme selected with `--type`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scheme {
    Annuity,
    Differentiated,
}

impl Scheme {
    fn name(self) -> &'static str {
        match self {
            Scheme::Annuity => "annuity",
            Scheme::Differentiated => "diff",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "annuity" => Ok(Scheme::Annuity),
            "diff" => Ok(Scheme::Differentiated),
            other => Err(LoanError::UnknownScheme(other.to_string())),
        }
    }
}

/// The known values of a query. The variant names the value to solve for.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum QueryKind {
    /// Annuity, solve for the monthly payment.
    Payment { principal: f64, periods: u32 },
    /// Annuity, solve for the principal.
    Principal { payment: f64, periods: u32 },
    /// Annuity, solve for the number of periods.
    Periods { principal: f64, payment: f64 },
    /// Differentiated, the payment schedule is always derived.
    Differentiated { principal: f64, periods: u32 },
}

/// A validated loan question.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LoanQuery {
    /// Monthly rate as a decimal (annual percent / 1200).
    pub monthly_rate: f64,
    pub kind: QueryKind,
}

impl LoanQuery {
    pub fn scheme(&self) -> Scheme {
        match self.kind {
            QueryKind::Differentiated { .. } => Scheme::Differentiated,
            _ => Scheme::Annuity,
        }
    }
}

impl TryFrom<&Args> for LoanQuery {
    type Error = LoanError;

    fn try_from(args: &Args) -> Result<Self> {
        let query = validate(args)?;
        debug!("accepted {} query: {:?}", query.scheme(), query);
        Ok(query)
    }
}

// an absent flag and an explicit zero both mean "unknown"
fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.)
}

fn known_periods(value: Option<i64>) -> Result<Option<u32>> {
    match value.filter(|v| *v != 0) {
        Some(n) => u32::try_from(n)
            .map(Some)
            .map_err(|_| LoanError::PeriodsOutOfRange(n)),
        None => Ok(None),
    }
}

fn validate(args: &Args) -> Result<LoanQuery> {
    let monthly_rate = args.interest.unwrap_or(0.) / RATE_DIVISOR;
    if !(monthly_rate > 0.) {
        return Err(LoanError::InvalidRate);
    }
    for (field, value) in [("payment", args.payment), ("principal", args.principal)] {
        if value.is_some_and(|v| v < 0.) {
            return Err(LoanError::Negative { field });
        }
    }
    if args.periods.is_some_and(|n| n < 0) {
        return Err(LoanError::Negative { field: "periods" });
    }

    let scheme: Scheme = args
        .kind
        .as_deref()
        .ok_or(LoanError::MissingField { field: "type" })?
        .parse()?;

    let supplied = args.supplied();
    let payment = known(args.payment);
    let principal = known(args.principal);
    let periods = known_periods(args.periods)?;

    let kind = match scheme {
        Scheme::Annuity => {
            if supplied < ANNUITY_MIN_FLAGS {
                return Err(LoanError::MissingArguments {
                    scheme: scheme.name(),
                    supplied,
                    required: ANNUITY_MIN_FLAGS,
                });
            }
            match (payment, principal, periods) {
                (None, Some(principal), Some(periods)) => QueryKind::Payment { principal, periods },
                (Some(payment), None, Some(periods)) => QueryKind::Principal { payment, periods },
                (Some(payment), Some(principal), None) => QueryKind::Periods { principal, payment },
                (a, b, c) => {
                    let count = [a.is_none(), b.is_none(), c.is_none()]
                        .iter()
                        .filter(|unknown| **unknown)
                        .count();
                    return Err(LoanError::Unknowns { count });
                }
            }
        }
        Scheme::Differentiated => {
            if payment.is_some() {
                return Err(LoanError::PaymentGiven);
            }
            if supplied < DIFF_MIN_FLAGS {
                return Err(LoanError::MissingArguments {
                    scheme: scheme.name(),
                    supplied,
                    required: DIFF_MIN_FLAGS,
                });
            }
            QueryKind::Differentiated {
                principal: principal.ok_or(LoanError::MissingField { field: "principal" })?,
                periods: periods.ok_or(LoanError::MissingField { field: "periods" })?,
            }
        }
    };

    Ok(LoanQuery { monthly_rate, kind })
}

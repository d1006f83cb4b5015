use log::{debug, trace};

use crate::error::{LoanError, Result};
use crate::query::{LoanQuery, QueryKind};

/// A solved annuity unknown with the total paid above the principal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solved {
    pub value: i64,
    pub overpayment: i64,
}

impl Solved {
    pub fn new(value: i64, overpayment: i64) -> Self {
        Self { value, overpayment }
    }
}

/// One month of a differentiated schedule.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffPayment {
    pub month: u32,
    pub amount: f64,
}

/// Differentiated repayment plan. Payments are computed on demand, so the
/// schedule never holds more than one month at a time.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffSchedule {
    principal: f64,
    rate: f64,
    periods: u32,
}

impl DiffSchedule {
    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Payment due in `month` (1-based): a fixed principal share plus interest
    /// on the balance still owed.
    pub fn payment(&self, month: u32) -> DiffPayment {
        let n = f64::from(self.periods);
        let balance = self.principal - self.principal * f64::from(month.saturating_sub(1)) / n;
        let amount = (self.principal / n + self.rate * balance).ceil();
        trace!("month {}, balance {}, payment {}", month, balance, amount);
        DiffPayment { month, amount }
    }

    pub fn payments(&self) -> DiffPayments {
        DiffPayments {
            schedule: *self,
            next: 1,
        }
    }

    pub fn total_paid(&self) -> f64 {
        self.payments().map(|p| p.amount).sum()
    }

    pub fn overpayment(&self) -> f64 {
        self.total_paid() - self.principal
    }
}

/// Month-by-month iterator over a [`DiffSchedule`].
#[derive(Clone, Debug)]
pub struct DiffPayments {
    schedule: DiffSchedule,
    next: u64,
}

impl Iterator for DiffPayments {
    type Item = DiffPayment;

    fn next(&mut self) -> Option<DiffPayment> {
        let month = u32::try_from(self.next)
            .ok()
            .filter(|m| *m <= self.schedule.periods)?;
        self.next += 1;
        Some(self.schedule.payment(month))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (u64::from(self.schedule.periods) + 1).saturating_sub(self.next);
        let left = usize::try_from(left).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for DiffPayments {}

/// Answer to a [`LoanQuery`]. The variant matches the unknown that was solved.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Payment(Solved),
    Principal(Solved),
    Periods(Solved),
    Differentiated(DiffSchedule),
}

/// Dispatch a validated query to the matching calculator.
pub fn calculate(query: &LoanQuery) -> Result<Outcome> {
    let rate = query.monthly_rate;
    let outcome = match query.kind {
        QueryKind::Payment { principal, periods } => {
            Outcome::Payment(solve_payment(principal, rate, periods)?)
        }
        QueryKind::Principal { payment, periods } => {
            Outcome::Principal(solve_principal(payment, rate, periods)?)
        }
        QueryKind::Periods { principal, payment } => {
            Outcome::Periods(solve_periods(principal, rate, payment)?)
        }
        QueryKind::Differentiated { principal, periods } => {
            Outcome::Differentiated(diff_schedule(principal, rate, periods)?)
        }
    };
    debug!("{:?}", outcome);
    Ok(outcome)
}

// i * (1 + i)^n / ((1 + i)^n - 1), the payment per unit of principal
fn annuity_factor(rate: f64, periods: u32) -> Result<f64> {
    let growth = (1. + rate).powf(f64::from(periods));
    let factor = (rate * growth) / (growth - 1.);
    trace!("growth {}, annuity factor {}", growth, factor);

    if factor.is_finite() && factor > 0. {
        Ok(factor)
    } else {
        Err(LoanError::NonFinite {
            operation: "annuity factor",
        })
    }
}

fn finite(value: f64, operation: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoanError::NonFinite { operation })
    }
}

/// Monthly annuity payment, rounded up.
pub fn solve_payment(
    principal: f64, // loan principal
    rate: f64,      // monthly rate as decimal
    periods: u32,   // number of monthly payments
) -> Result<Solved> {
    let factor = annuity_factor(rate, periods)?;
    let payment = finite((principal * factor).ceil(), "payment")? as i64;
    let overpayment = payment.saturating_mul(i64::from(periods)) - principal as i64;
    Ok(Solved::new(payment, overpayment))
}

/// Principal that a fixed payment amortizes, rounded down.
pub fn solve_principal(
    payment: f64, // monthly annuity payment
    rate: f64,    // monthly rate as decimal
    periods: u32, // number of monthly payments
) -> Result<Solved> {
    let factor = annuity_factor(rate, periods)?;
    let principal = finite((payment / factor).floor(), "principal")? as i64;
    let total = finite(payment * f64::from(periods), "total paid")?;
    Ok(Solved::new(principal, total as i64 - principal))
}

/// Number of monthly payments needed to repay the principal, rounded up.
pub fn solve_periods(
    principal: f64, // loan principal
    rate: f64,      // monthly rate as decimal
    payment: f64,   // monthly annuity payment
) -> Result<Solved> {
    let interest = rate * principal;
    if payment <= interest {
        return Err(LoanError::PaymentBelowInterest);
    }

    let exact = (payment / (payment - interest)).ln() / (1. + rate).ln();
    trace!("exact number of periods {}", exact);
    let periods = finite(exact.ceil(), "periods")? as i64;
    let overpayment = (payment * periods as f64 - principal) as i64;
    Ok(Solved::new(periods, overpayment))
}

/// Differentiated schedule for `principal` repaid over `periods` months.
///
/// The first payment is the largest one, so checking it is enough to reject
/// values that would print as `inf` or `NaN`.
pub fn diff_schedule(principal: f64, rate: f64, periods: u32) -> Result<DiffSchedule> {
    let schedule = DiffSchedule {
        principal,
        rate,
        periods,
    };
    if periods > 0 {
        finite(schedule.payment(1).amount, "differentiated payment")?;
    }
    Ok(schedule)
}

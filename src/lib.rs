//! Loan calculator: solve the missing parameter of an annuity loan or lay out
//! a differentiated repayment schedule.

pub mod cli;
pub mod constants;
pub mod error;
pub mod loan;
pub mod query;
pub mod report;

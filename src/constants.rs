//! Fixed values shared by the calculators and the command-line shell.

/// Number of monthly periods in a year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Annual percent to monthly decimal rate: 12 months * 100 percent.
pub const RATE_DIVISOR: f64 = 1200.;

/// Minimum number of supplied flags (including `--type`) for an annuity query.
pub const ANNUITY_MIN_FLAGS: usize = 4;

/// Minimum number of supplied flags (including `--type`) for a differentiated query.
pub const DIFF_MIN_FLAGS: usize = 3;

/// The only message the user sees for a rejected query.
pub const INVALID_INPUT_MESSAGE: &str = "Incorrect parameters";

/// Exit status after a rejected query. Zero matches the historical behaviour.
pub const INVALID_INPUT_EXIT: u8 = 0;

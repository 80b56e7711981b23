//! Financial calculators
//!
//! Pure functions with no I/O and no shared state. Rates are expressed as
//! annual percentages (`5.0` means 5%).

use crate::error::CalcError;

pub mod budget;
pub mod currency;

pub use budget::{BudgetSplit, budget_split};
pub use currency::{format_currency, format_decimal};

/// Months in a year, used to derive monthly rates and payment counts
const MONTHS_PER_YEAR: u32 = 12;

/// Longest savings horizon the month-by-month projection will simulate
pub const MAX_SAVINGS_YEARS: u32 = 1_000;

/// Future value of `principal` after `years` with `periods_per_year` compounding.
///
/// `principal * (1 + r/n)^(n*t)` with `r = annual_rate_percent / 100`.
/// Negative `years` discount instead of grow; validating the domain is up to
/// the caller.
pub fn compound_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    periods_per_year: i64,
) -> Result<f64, CalcError> {
    if periods_per_year <= 0 {
        return Err(CalcError::InvalidCompoundingPeriods(periods_per_year));
    }

    let rate = annual_rate_percent / 100.0;
    let n = periods_per_year as f64;
    Ok(principal * (1.0 + rate / n).powf(n * years))
}

/// Fixed monthly payment that amortizes `principal` over `years`.
///
/// A zero rate has no amortization factor, so the payment is the principal
/// spread evenly over the term.
pub fn loan_monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Result<f64, CalcError> {
    if years == 0 {
        return Err(CalcError::ZeroLoanTerm);
    }

    let payments = f64::from(years) * f64::from(MONTHS_PER_YEAR);
    let monthly_rate = monthly_rate(annual_rate_percent);

    if monthly_rate == 0.0 {
        return Ok(principal / payments);
    }

    let growth = (1.0 + monthly_rate).powf(payments);
    if growth.is_infinite() {
        // Payment converges to the interest on the principal
        return Ok(principal * monthly_rate);
    }
    Ok(principal * (monthly_rate * growth) / (growth - 1.0))
}

/// Balance after contributing `monthly_contribution` every month for `years`.
///
/// Each month the contribution is deposited first and the whole balance then
/// earns one month of interest. Terms above [`MAX_SAVINGS_YEARS`] are rejected.
pub fn savings_projection(
    monthly_contribution: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Result<f64, CalcError> {
    if years > MAX_SAVINGS_YEARS {
        return Err(CalcError::TermTooLong {
            years,
            max: MAX_SAVINGS_YEARS,
        });
    }

    let monthly_rate = monthly_rate(annual_rate_percent);
    let months = years * MONTHS_PER_YEAR;

    Ok((0..months).fold(0.0, |total, _| {
        (total + monthly_contribution) * (1.0 + monthly_rate)
    }))
}

/// Reject NaN and infinite inputs before they reach a formula.
pub fn ensure_finite(value: f64, name: &'static str) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite(name))
    }
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / f64::from(MONTHS_PER_YEAR)
}

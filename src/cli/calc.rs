//! Financial calculator commands
//!
//! Pure computations; no config, session or network access.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::error::{Result, ValidationError};
use crate::finance::{
    self, budget_split, compound_interest, format_currency, loan_monthly_payment,
    savings_projection,
};
use crate::models::BudgetDisplay;
use crate::output::{Formattable, print_json};

/// Calculators read the format flag only; the config file is not consulted
fn format_of(opts: &GlobalOptions) -> OutputFormat {
    opts.format.unwrap_or_default()
}

#[derive(Debug, Serialize)]
struct CalcResult<I: Serialize> {
    calculation: &'static str,
    inputs: I,
    result: f64,
    formatted: String,
}

fn print_result<I: Serialize>(
    opts: &GlobalOptions,
    calculation: &'static str,
    label: &str,
    inputs: I,
    result: f64,
) -> Result<()> {
    let formatted = format_currency(result);
    match format_of(opts) {
        OutputFormat::Json => print_json(&CalcResult {
            calculation,
            inputs,
            result,
            formatted,
        }),
        OutputFormat::Table => {
            println!("{}", formatted);
            Ok(())
        }
        OutputFormat::Pretty => {
            println!("{}: {}", label, formatted.bold().green());
            Ok(())
        }
    }
}

/// Run `calc interest`
pub fn interest(
    opts: &GlobalOptions,
    principal: f64,
    rate: f64,
    years: f64,
    periods: i64,
) -> Result<()> {
    finance::ensure_finite(principal, "principal")?;
    finance::ensure_finite(rate, "rate")?;
    finance::ensure_finite(years, "years")?;

    let total = compound_interest(principal, rate, years, periods)?;
    print_result(
        opts,
        "compound_interest",
        "Future value",
        serde_json::json!({
            "principal": principal,
            "annual_rate_percent": rate,
            "years": years,
            "periods_per_year": periods,
        }),
        total,
    )
}

/// Run `calc loan`
pub fn loan(opts: &GlobalOptions, principal: f64, rate: f64, years: u32) -> Result<()> {
    finance::ensure_finite(principal, "principal")?;
    finance::ensure_finite(rate, "rate")?;

    let payment = loan_monthly_payment(principal, rate, years)?;
    print_result(
        opts,
        "loan_monthly_payment",
        "Monthly payment",
        serde_json::json!({
            "principal": principal,
            "annual_rate_percent": rate,
            "years": years,
        }),
        payment,
    )
}

/// Run `calc savings`
pub fn savings(opts: &GlobalOptions, monthly: f64, rate: f64, years: u32) -> Result<()> {
    finance::ensure_finite(monthly, "monthly contribution")?;
    finance::ensure_finite(rate, "rate")?;

    let total = savings_projection(monthly, rate, years)?;
    print_result(
        opts,
        "savings_projection",
        "Projected savings",
        serde_json::json!({
            "monthly_contribution": monthly,
            "annual_rate_percent": rate,
            "years": years,
        }),
        total,
    )
}

/// Run `calc budget`
pub fn budget(opts: &GlobalOptions, income: &str) -> Result<()> {
    let income: Decimal = income
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(income.to_string()))?;

    let split = budget_split(income);
    match format_of(opts) {
        OutputFormat::Json => print_json(&split),
        format => BudgetDisplay::rows(&split).print(format),
    }
}

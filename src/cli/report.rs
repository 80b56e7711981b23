//! Report command: totals and category breakdown

use colored::Colorize;
use rust_decimal::Decimal;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::finance::format_decimal;
use crate::models::{CategoryDisplay, TotalsDisplay};
use crate::output::{Formattable, print_json};
use crate::services::{Summary, TransactionFilter};

/// Run the report command.
///
/// Summarises the full transaction list unless `server` asks for the
/// report endpoint's selection instead.
pub async fn run(opts: &GlobalOptions, server: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let service = ctx.transaction_service();

    let transactions = if server {
        service.reports().await?
    } else {
        service.list(&TransactionFilter::default()).await?
    };
    let summary = Summary::from_transactions(&transactions);

    match ctx.format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => {
            TotalsDisplay::rows(&summary).print(ctx.format)?;
            summary
                .categories
                .iter()
                .map(CategoryDisplay::from)
                .collect::<Vec<_>>()
                .print(ctx.format)
        }
        OutputFormat::Pretty => {
            print_pretty(&summary, &ctx.config.preferences.currency);
            Ok(())
        }
    }
}

fn print_pretty(summary: &Summary, currency: &str) {
    println!("{} ({})\n", "Financial Summary".bold(), currency);

    println!("  Income    {:>16}", format_decimal(summary.income).green());
    println!("  Expenses  {:>16}", format_decimal(summary.expenses).red());

    let balance = format_decimal(summary.balance);
    let balance = if summary.balance < Decimal::ZERO {
        balance.red().bold()
    } else {
        balance.bold()
    };
    println!("  Balance   {:>16}", balance);
    println!("  Savings rate {}%", summary.savings_rate);

    if summary.categories.is_empty() {
        println!("\n{}", "No expenses recorded.".dimmed());
        return;
    }

    println!("\n{}", "Spending by category".bold());
    for total in &summary.categories {
        println!(
            "  {:<24} {:>14} {:>7}",
            total.category,
            format_decimal(total.amount),
            format!("{}%", total.share).dimmed()
        );
    }
}

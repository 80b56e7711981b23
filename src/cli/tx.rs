//! Transaction commands

use std::path::Path;

use colored::Colorize;
use dialoguer::Confirm;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, TxAddArgs};
use crate::client::models::Transaction;
use crate::error::Result;
use crate::models::{FieldDisplay, TransactionDisplay, format_signed};
use crate::output::{Formattable, print_json};
use crate::services::{Receipt, TransactionDraft, TransactionFilter, TransactionKind, group_by_date};

fn colored_amount(tx: &Transaction) -> String {
    let amount = format_signed(tx.amount, tx.is_expense);
    if tx.is_expense {
        amount.red().to_string()
    } else {
        amount.green().to_string()
    }
}

/// Run `tx add`
pub async fn add(opts: &GlobalOptions, args: &TxAddArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let receipt = match (&args.receipt, &args.receipt_url) {
        (Some(file), _) => Some(Receipt::File(file.clone())),
        (None, Some(url)) => Some(Receipt::Url(url.clone())),
        (None, None) => None,
    };

    let draft = TransactionDraft {
        amount: args.amount.clone(),
        description: args.description.clone(),
        category: args.category.clone(),
        date: args.date.clone(),
        is_income: args.income,
        recurring: args.recurring,
        receipt,
        location: args.location.clone(),
    };

    let today = chrono::Local::now().date_naive();
    let created = ctx.transaction_service().create(&draft, today).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&created),
        OutputFormat::Table => vec![TransactionDisplay::from(&created)].print(ctx.format),
        OutputFormat::Pretty => {
            println!(
                "{} Recorded {} {} ({}) on {}",
                "✓".green(),
                colored_amount(&created),
                created.description.bold(),
                created.category,
                created.date
            );
            println!("  ID: {}", created.id.dimmed());
            if let Some(url) = &created.receipt_url {
                println!("  Receipt: {}", url.cyan());
            }
            Ok(())
        }
    }
}

/// Run `tx list`
pub async fn list(
    opts: &GlobalOptions,
    kind: TransactionKind,
    search: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let filter = TransactionFilter {
        kind,
        search,
        limit,
    };

    let transactions = ctx.transaction_service().list(&filter).await?;
    debug!("Showing {} transactions", transactions.len());

    match ctx.format {
        OutputFormat::Json => print_json(&transactions),
        OutputFormat::Table => transactions
            .iter()
            .map(TransactionDisplay::from)
            .collect::<Vec<_>>()
            .print(ctx.format),
        OutputFormat::Pretty => {
            if transactions.is_empty() {
                println!("No transactions found.");
                return Ok(());
            }

            for (date, group) in group_by_date(&transactions) {
                println!("{}", date.format("%a %d %b %Y").to_string().bold());
                for tx in group {
                    let receipt = if tx.has_receipt() { " ✓ receipt" } else { "" };
                    println!(
                        "  {:<32} {:<18} {:>14}{}",
                        tx.description,
                        tx.category.dimmed(),
                        colored_amount(tx),
                        receipt
                    );
                }
                println!();
            }
            println!("{} transaction(s)", transactions.len());
            Ok(())
        }
    }
}

/// Run `tx get`; several ids are fetched concurrently
pub async fn get(opts: &GlobalOptions, ids: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let transactions = ctx.transaction_service().get_many(ids).await?;

    match ctx.format {
        OutputFormat::Json => {
            if let [single] = transactions.as_slice() {
                print_json(single)
            } else {
                print_json(&transactions)
            }
        }
        OutputFormat::Table => transactions
            .iter()
            .map(TransactionDisplay::from)
            .collect::<Vec<_>>()
            .print(ctx.format),
        OutputFormat::Pretty => {
            for tx in &transactions {
                FieldDisplay::rows(tx).print(ctx.format)?;
            }
            Ok(())
        }
    }
}

/// Run `tx delete`
pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let service = ctx.transaction_service();

    // Confirmation prompt unless --yes
    if !yes {
        let tx = service.get(id).await?;
        eprintln!(
            "{} Delete {} {} ({}) from {}? This cannot be undone.",
            "⚠".yellow(),
            format_signed(tx.amount, tx.is_expense),
            tx.description,
            tx.category,
            tx.date
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    service.delete(id).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "deleted": true, "id": id })),
        _ => {
            eprintln!("{} Transaction {} deleted", "✓".green(), id);
            Ok(())
        }
    }
}

/// Run `tx upload`
pub async fn upload(opts: &GlobalOptions, file: &Path) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let url = ctx.transaction_service().upload_receipt(file).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "file": file.display().to_string(),
            "secure_url": url,
        })),
        _ => {
            println!("{} Uploaded {}", "✓".green(), file.display());
            println!("  URL: {}", url.cyan());
            println!(
                "  → Attach it with {}",
                format!("centavo tx add ... --receipt-url {}", url).cyan()
            );
            Ok(())
        }
    }
}


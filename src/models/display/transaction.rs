//! Transaction display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_signed, or_dash, truncate_string};
use crate::client::models::{RecurringPeriod, Transaction};

/// Transaction display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TransactionDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    /// Signed amount: expenses negative, income with a leading `+`
    #[tabled(rename = "AMOUNT")]
    pub amount: String,

    #[tabled(rename = "REPEATS")]
    pub repeats: String,

    #[tabled(rename = "RECEIPT")]
    pub receipt: String,
}

impl From<&Transaction> for TransactionDisplay {
    fn from(tx: &Transaction) -> Self {
        let repeats = if tx.is_recurring && tx.recurring_period != RecurringPeriod::None {
            tx.recurring_period.to_string()
        } else {
            "--".to_string()
        };

        Self {
            id: tx.id.clone(),
            date: tx.date.format("%Y-%m-%d").to_string(),
            description: truncate_string(&tx.description, 40),
            category: tx.category.clone(),
            amount: format_signed(tx.amount, tx.is_expense),
            repeats,
            receipt: if tx.has_receipt() { "✓" } else { "" }.to_string(),
        }
    }
}

/// Single transaction as label/value rows for `tx get`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FieldDisplay {
    #[tabled(rename = "FIELD")]
    pub field: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl FieldDisplay {
    pub fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// Every field of a transaction, in display order
    pub fn rows(tx: &Transaction) -> Vec<Self> {
        vec![
            Self::new("ID", tx.id.clone()),
            Self::new("Type", if tx.is_expense { "Expense" } else { "Income" }),
            Self::new("Amount", format_signed(tx.amount, tx.is_expense)),
            Self::new("Description", tx.description.clone()),
            Self::new("Category", tx.category.clone()),
            Self::new("Date", tx.date.format("%Y-%m-%d").to_string()),
            Self::new(
                "Repeats",
                if tx.is_recurring {
                    tx.recurring_period.to_string()
                } else {
                    "--".to_string()
                },
            ),
            Self::new("Receipt", or_dash(tx.receipt_url.as_deref())),
            Self::new("Location", or_dash(tx.location.as_deref())),
        ]
    }
}

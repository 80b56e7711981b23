//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::models::{RecurringPeriod, Transaction};

/// Builder for creating test Transaction instances.
///
/// Defaults to a 100.00 expense in "General" on 2025-01-01.
///
/// # Example
/// ```ignore
/// let salary = TransactionBuilder::new("t1")
///     .income()
///     .amount(Decimal::from(15000))
///     .category("Sueldo")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            tx: Transaction {
                description: format!("Transaction {}", &id),
                id,
                amount: Decimal::new(10000, 2),
                is_expense: true,
                category: "General".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
                is_recurring: false,
                recurring_period: RecurringPeriod::None,
                receipt_url: None,
                location: None,
            },
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.tx.amount = amount;
        self
    }

    pub fn income(mut self) -> Self {
        self.tx.is_expense = false;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.tx.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.tx.category = category.into();
        self
    }

    /// Set the date from `YYYY-MM-DD`; unparseable input keeps the current one
    pub fn date(mut self, date: &str) -> Self {
        self.tx.date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or(self.tx.date);
        self
    }

    pub fn recurring(mut self, period: RecurringPeriod) -> Self {
        self.tx.is_recurring = period != RecurringPeriod::None;
        self.tx.recurring_period = period;
        self
    }

    pub fn receipt(mut self, url: impl Into<String>) -> Self {
        self.tx.receipt_url = Some(url.into());
        self
    }

    pub fn build(self) -> Transaction {
        self.tx
    }
}

/// Create a minimal test expense.
pub fn test_expense(id: &str, amount: i64, category: &str) -> Transaction {
    TransactionBuilder::new(id)
        .amount(Decimal::from(amount))
        .category(category)
        .build()
}

/// Create a minimal test income.
pub fn test_income(id: &str, amount: i64) -> Transaction {
    TransactionBuilder::new(id)
        .income()
        .amount(Decimal::from(amount))
        .category("Sueldo")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_builder_defaults() {
        let tx = TransactionBuilder::new("t1").build();
        assert_eq!(tx.id, "t1");
        assert_eq!(tx.description, "Transaction t1");
        assert!(tx.is_expense);
        assert!(!tx.has_receipt());
    }

    #[test]
    fn test_transaction_builder_recurring() {
        let tx = TransactionBuilder::new("t2")
            .recurring(RecurringPeriod::Monthly)
            .date("2025-02-28")
            .build();
        assert!(tx.is_recurring);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }
}

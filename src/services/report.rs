//! Filtering and summaries over fetched transactions

use std::collections::BTreeMap;

use chrono::NaiveDate;
use clap::ValueEnum;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::client::models::Transaction;

/// Which transactions a listing shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    All,
    Expenses,
    Income,
    /// Only transactions with a receipt attached
    Receipts,
}

/// Criteria applied to a transaction listing
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: TransactionKind,
    /// Case-insensitive match against description and category
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let kind_ok = match self.kind {
            TransactionKind::All => true,
            TransactionKind::Expenses => tx.is_expense,
            TransactionKind::Income => !tx.is_expense,
            TransactionKind::Receipts => tx.has_receipt(),
        };

        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                tx.description.to_lowercase().contains(&query)
                    || tx.category.to_lowercase().contains(&query)
            }
        };

        kind_ok && search_ok
    }

    /// Keep matching transactions, newest first, up to the limit
    pub fn apply(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        let mut kept: Vec<Transaction> = transactions
            .into_iter()
            .filter(|tx| self.matches(tx))
            .collect();

        kept.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = self.limit {
            kept.truncate(limit);
        }
        kept
    }
}

/// Group transactions by calendar day, newest day first
pub fn group_by_date(transactions: &[Transaction]) -> Vec<(NaiveDate, Vec<&Transaction>)> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
    for tx in transactions {
        groups.entry(tx.date).or_default().push(tx);
    }
    groups.into_iter().rev().collect()
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    /// Share of all expenses, percent, one decimal place
    pub share: Decimal,
}

/// Totals over a set of transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub transaction_count: usize,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    /// Percent of income not spent, truncated toward zero; 0 without income
    pub savings_rate: i64,
    /// Expense categories, largest first
    pub categories: Vec<CategoryTotal>,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();

        for tx in transactions {
            if tx.is_expense {
                expenses += tx.amount;
                *by_category.entry(tx.category.as_str()).or_default() += tx.amount;
            } else {
                income += tx.amount;
            }
        }

        let balance = income - expenses;
        let savings_rate = if income > Decimal::ZERO {
            (balance / income * Decimal::ONE_HUNDRED)
                .trunc()
                .to_i64()
                .unwrap_or(0)
        } else {
            0
        };

        let mut categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category: category.to_string(),
                amount,
                share: share_of(amount, expenses),
            })
            .collect();
        // Ties keep alphabetical order from the BTreeMap
        categories.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            transaction_count: transactions.len(),
            income,
            expenses,
            balance,
            savings_rate,
            categories,
        }
    }
}

fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

//! Report and calculator display models

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::finance::{BudgetSplit, format_decimal};
use crate::services::{CategoryTotal, Summary};

/// Category breakdown row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CategoryDisplay {
    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "SPENT")]
    pub amount: String,

    #[tabled(rename = "SHARE")]
    pub share: String,
}

impl From<&CategoryTotal> for CategoryDisplay {
    fn from(total: &CategoryTotal) -> Self {
        Self {
            category: total.category.clone(),
            amount: format_decimal(total.amount),
            share: format!("{}%", total.share),
        }
    }
}

/// Headline figures of a summary as label/value rows
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TotalsDisplay {
    #[tabled(rename = "METRIC")]
    pub metric: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl TotalsDisplay {
    pub fn rows(summary: &Summary) -> Vec<Self> {
        let row = |metric: &str, value: String| Self {
            metric: metric.to_string(),
            value,
        };

        vec![
            row("Transactions", summary.transaction_count.to_string()),
            row("Income", format_decimal(summary.income)),
            row("Expenses", format_decimal(summary.expenses)),
            row("Balance", format_decimal(summary.balance)),
            row("Savings rate", format!("{}%", summary.savings_rate)),
        ]
    }
}

/// One bucket of a 50/30/20 split
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BudgetDisplay {
    #[tabled(rename = "BUCKET")]
    pub bucket: String,

    #[tabled(rename = "SHARE")]
    pub share: String,

    #[tabled(rename = "AMOUNT")]
    pub amount: String,
}

impl BudgetDisplay {
    pub fn rows(split: &BudgetSplit) -> Vec<Self> {
        let row = |bucket: &str, share: u8, amount: Decimal| Self {
            bucket: bucket.to_string(),
            share: format!("{}%", share),
            amount: format_decimal(amount),
        };

        vec![
            row("Needs", 50, split.needs),
            row("Wants", 30, split.wants),
            row("Savings", 20, split.savings),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::budget_split;

    #[test]
    fn test_budget_rows() {
        let rows = BudgetDisplay::rows(&budget_split(Decimal::from(10000)));
        assert_eq!(rows[0].amount, "$5,000.00");
        assert_eq!(rows[1].amount, "$3,000.00");
        assert_eq!(rows[2].amount, "$2,000.00");
        assert_eq!(rows[2].share, "20%");
    }

    #[test]
    fn test_category_display() {
        let display = CategoryDisplay::from(&CategoryTotal {
            category: "Renta".to_string(),
            amount: Decimal::from(2500),
            share: Decimal::new(521, 1),
        });
        assert_eq!(display.amount, "$2,500.00");
        assert_eq!(display.share, "52.1%");
    }
}

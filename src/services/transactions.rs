//! Transaction service - validated create, fetch and delete

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::try_join_all;
use log::debug;

use super::report::TransactionFilter;
use super::validation;
use crate::client::TransactionApi;
use crate::client::models::{CreateTransactionRequest, NewTransaction, RecurringPeriod, Transaction};
use crate::error::{Result, ValidationError};

/// Where a new transaction's receipt comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Receipt {
    /// Local image, uploaded before the transaction is created
    File(PathBuf),
    /// Already-hosted image
    Url(String),
}

/// Raw form input for a new transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub amount: String,
    pub description: String,
    pub category: String,
    /// `YYYY-MM-DD`; today when absent
    pub date: Option<String>,
    pub is_income: bool,
    /// Repeat period; `None` or [`RecurringPeriod::None`] means one-off
    pub recurring: Option<RecurringPeriod>,
    pub receipt: Option<Receipt>,
    pub location: Option<String>,
}

impl TransactionDraft {
    /// Validate every field, reporting the first problem found
    pub fn validate(&self, today: NaiveDate) -> std::result::Result<NewTransaction, ValidationError> {
        let amount = validation::parse_amount(&self.amount)?;
        let description = validation::validate_description(&self.description)?;
        let category = validation::validate_category(&self.category)?;
        let date = validation::parse_date(self.date.as_deref(), today)?;

        let recurring_period = self.recurring.unwrap_or_default();
        let receipt_url = match &self.receipt {
            Some(Receipt::Url(url)) if !url.trim().is_empty() => Some(url.trim().to_string()),
            Some(Receipt::File(path)) => {
                ensure_receipt_exists(path)?;
                None
            }
            _ => None,
        };

        Ok(NewTransaction {
            amount,
            is_expense: !self.is_income,
            description,
            category,
            date,
            is_recurring: recurring_period != RecurringPeriod::None,
            recurring_period,
            receipt_url,
            location: self
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        })
    }
}

fn ensure_receipt_exists(path: &Path) -> std::result::Result<(), ValidationError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ValidationError::ReceiptNotFound(path.display().to_string()))
    }
}

/// Transaction operations for the signed-in user
pub struct TransactionService {
    client: Arc<dyn TransactionApi>,
}

impl TransactionService {
    pub fn new(client: Arc<dyn TransactionApi>) -> Self {
        Self { client }
    }

    /// Validate a draft, upload its receipt file if any, then create it
    pub async fn create(&self, draft: &TransactionDraft, today: NaiveDate) -> Result<Transaction> {
        let mut new_tx = draft.validate(today)?;

        if let Some(Receipt::File(path)) = &draft.receipt {
            let url = self.client.upload_receipt(path).await?;
            debug!("Receipt uploaded to {}", url);
            new_tx.receipt_url = Some(url);
        }

        let request = CreateTransactionRequest::from(&new_tx);
        let created = self.client.create_transaction(&request).await?;
        debug!("Created transaction {}", created.id);
        Ok(created)
    }

    /// All transactions matching `filter`, newest first
    pub async fn list(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let transactions = self.client.list_transactions().await?;
        debug!("Fetched {} transactions", transactions.len());
        Ok(filter.apply(transactions))
    }

    pub async fn get(&self, id: &str) -> Result<Transaction> {
        self.client.get_transaction(id).await
    }

    /// Fetch several transactions concurrently; fails if any is missing
    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<Transaction>> {
        try_join_all(ids.iter().map(|id| self.client.get_transaction(id))).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete_transaction(id).await?;
        debug!("Deleted transaction {}", id);
        Ok(())
    }

    /// Upload a receipt on its own and return the hosted URL
    pub async fn upload_receipt(&self, path: &Path) -> Result<String> {
        ensure_receipt_exists(path)?;
        self.client.upload_receipt(path).await
    }

    /// Transactions as served by the server's report endpoint
    pub async fn reports(&self) -> Result<Vec<Transaction>> {
        self.client.transaction_reports().await
    }
}

//! Transaction API trait

use std::path::Path;

use async_trait::async_trait;

use crate::client::models::{CreateTransactionRequest, Transaction};
use crate::error::Result;

/// Transaction operations for the Centavo API
///
/// All calls are authorized with the stored bearer token when one is valid.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Create a transaction and return it as stored
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<Transaction>;

    /// List the user's transactions
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Fetch a single transaction by id
    async fn get_transaction(&self, id: &str) -> Result<Transaction>;

    /// Delete a transaction by id
    async fn delete_transaction(&self, id: &str) -> Result<()>;

    /// Transactions as prepared by the server's report endpoint
    async fn transaction_reports(&self) -> Result<Vec<Transaction>>;

    /// Upload a receipt image and return its public URL
    async fn upload_receipt(&self, file: &Path) -> Result<String>;
}

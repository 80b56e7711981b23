//! Mock Centavo API client for testing
//!
//! Provides an in-memory implementation of the API traits so services can
//! be tested without a server.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use super::api::{AuthApi, TransactionApi};
use super::models::{
    AuthResponse, CreateTransactionRequest, LoginRequest, RegisterRequest, Transaction,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockFinanceClient::new()
///     .with_transactions(vec![groceries()])
///     .await;
///
/// let txs = mock.list_transactions().await?;
/// assert_eq!(txs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockFinanceClient {
    /// Backing store for list/get/create/delete
    transactions: Arc<Mutex<Vec<Transaction>>>,
    /// Response to return from register and login
    auth_response: Arc<Mutex<Option<AuthResponse>>>,
    /// URL to return from upload_receipt
    receipt_url: Arc<Mutex<Option<String>>>,
    /// Error to return on the next call; consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub register: usize,
    pub login: usize,
    pub create_transaction: usize,
    pub list_transactions: usize,
    pub get_transaction: usize,
    pub delete_transaction: usize,
    pub transaction_reports: usize,
    pub upload_receipt: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.register
            + self.login
            + self.create_transaction
            + self.list_transactions
            + self.get_transaction
            + self.delete_transaction
            + self.transaction_reports
            + self.upload_receipt
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum CapturedRequest {
    Register(RegisterRequest),
    Login(LoginRequest),
    CreateTransaction(CreateTransactionRequest),
    Upload(String),
}

impl MockFinanceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
        *self.transactions.lock().await = transactions;
        self
    }

    /// Configure the response returned by register and login.
    pub async fn with_auth_response(self, response: AuthResponse) -> Self {
        *self.auth_response.lock().await = Some(response);
        self
    }

    pub async fn with_receipt_url(self, url: &str) -> Self {
        *self.receipt_url.lock().await = Some(url.to_string());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }

    async fn auth(&self) -> Result<AuthResponse> {
        self.check_error().await?;
        Ok(self.auth_response.lock().await.clone().unwrap_or_default())
    }
}

#[async_trait]
impl AuthApi for MockFinanceClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.call_count.lock().await.register += 1;
        self.capture(CapturedRequest::Register(request.clone())).await;
        self.auth().await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.call_count.lock().await.login += 1;
        self.capture(CapturedRequest::Login(request.clone())).await;
        self.auth().await
    }
}

#[async_trait]
impl TransactionApi for MockFinanceClient {
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<Transaction> {
        self.call_count.lock().await.create_transaction += 1;
        self.capture(CapturedRequest::CreateTransaction(request.clone()))
            .await;
        self.check_error().await?;

        let amount = Decimal::from_str(&request.amount)
            .map_err(|e| ApiError::BadRequest(format!("amount: {}", e)))?;
        let date = request
            .date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .ok_or_else(|| ApiError::BadRequest(format!("date: {}", request.date)))?;

        let mut transactions = self.transactions.lock().await;
        let created = Transaction {
            id: format!("tx-{}", transactions.len() + 1),
            amount,
            is_expense: request.is_expense,
            description: request.description.clone(),
            category: request.category.clone(),
            date,
            is_recurring: request.is_recurring,
            recurring_period: request.recurring_period,
            receipt_url: request.receipt_url.clone(),
            location: request.location.clone(),
        };
        transactions.push(created.clone());
        Ok(created)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.call_count.lock().await.list_transactions += 1;
        self.check_error().await?;
        Ok(self.transactions.lock().await.clone())
    }

    async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        self.call_count.lock().await.get_transaction += 1;
        self.check_error().await?;
        self.transactions
            .lock()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Transaction {}", id)).into())
    }

    async fn delete_transaction(&self, id: &str) -> Result<()> {
        self.call_count.lock().await.delete_transaction += 1;
        self.check_error().await?;
        let mut transactions = self.transactions.lock().await;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Err(ApiError::NotFound(format!("Transaction {}", id)).into());
        }
        Ok(())
    }

    async fn transaction_reports(&self) -> Result<Vec<Transaction>> {
        self.call_count.lock().await.transaction_reports += 1;
        self.check_error().await?;
        Ok(self.transactions.lock().await.clone())
    }

    async fn upload_receipt(&self, file: &Path) -> Result<String> {
        self.call_count.lock().await.upload_receipt += 1;
        self.capture(CapturedRequest::Upload(file.display().to_string()))
            .await;
        self.check_error().await?;
        self.receipt_url
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::InvalidResponse("No receipt URL returned".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::RecurringPeriod;

    fn request(amount: &str) -> CreateTransactionRequest {
        CreateTransactionRequest {
            amount: amount.to_string(),
            is_expense: true,
            description: "Coffee".to_string(),
            category: "Alimentación".to_string(),
            date: "2025-04-02T00:00:00.000Z".to_string(),
            is_recurring: false,
            recurring_period: RecurringPeriod::None,
            receipt_url: None,
            location: None,
        }
    }

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockFinanceClient::new();
        assert!(mock.list_transactions().await.unwrap().is_empty());
        assert!(mock.get_transaction("missing").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_create_then_get() {
        let mock = MockFinanceClient::new();
        let created = mock.create_transaction(&request("45.5")).await.unwrap();

        assert_eq!(created.id, "tx-1");
        assert_eq!(created.amount, Decimal::from_str("45.5").unwrap());

        let fetched = mock.get_transaction("tx-1").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockFinanceClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        assert!(mock.list_transactions().await.is_err());
        assert!(mock.list_transactions().await.is_ok());
        assert_eq!(mock.call_counts().await.list_transactions, 2);
    }

    #[tokio::test]
    async fn test_mock_delete_missing_is_not_found() {
        let mock = MockFinanceClient::new();
        mock.create_transaction(&request("10")).await.unwrap();

        assert!(mock.delete_transaction("tx-9").await.is_err());
        mock.delete_transaction("tx-1").await.unwrap();
        assert!(mock.list_transactions().await.unwrap().is_empty());
    }
}

//! Centavo API data models
//!
//! Request and response types for the backend, organized by resource.

mod auth;
mod transaction;

pub use auth::{AuthResponse, AuthUser, LoginRequest, RegisterRequest};
pub use transaction::{
    CreateTransactionRequest, NewTransaction, RecurringPeriod, Transaction, UploadReceiptResponse,
};

//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Registration and login
//! - [`TransactionApi`] - Transaction CRUD, reports and receipt upload
//!
//! Services depend on these traits so tests can swap in a mock client.

mod auth;
mod transactions;

pub use auth::AuthApi;
pub use transactions::TransactionApi;

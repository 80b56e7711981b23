//! Service layer - use cases built on the API client and session store
//!
//! Services validate input, call the API through its traits and keep the
//! session store up to date. The CLI talks to services, never to the HTTP
//! client directly.

mod auth;
mod report;
mod transactions;
pub mod validation;

pub use auth::{AuthOutcome, AuthService};
pub use report::{CategoryTotal, Summary, TransactionFilter, TransactionKind, group_by_date};
pub use transactions::{Receipt, TransactionDraft, TransactionService};

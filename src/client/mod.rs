//! Centavo API client

pub mod api;
pub mod centavo;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, TransactionApi};
pub use centavo::CentavoClient;
#[cfg(test)]
pub use mock::MockFinanceClient;


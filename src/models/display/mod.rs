//! Display model implementations for table and JSON output
//!
//! Display models transform API and service types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod report;
mod transaction;

pub use common::format_signed;
pub use report::{BudgetDisplay, CategoryDisplay, TotalsDisplay};
pub use transaction::{FieldDisplay, TransactionDisplay};

//! Display models for CLI output

pub mod display;

pub use display::{
    BudgetDisplay, CategoryDisplay, FieldDisplay, TotalsDisplay, TransactionDisplay,
    format_signed,
};

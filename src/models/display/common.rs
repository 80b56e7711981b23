//! Common display utilities and helpers

use rust_decimal::Decimal;

use crate::finance::format_decimal;

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Currency amount with the sign a transaction contributes to the balance
pub fn format_signed(amount: Decimal, is_expense: bool) -> String {
    if is_expense {
        format_decimal(-amount)
    } else {
        format!("+{}", format_decimal(amount))
    }
}

/// Placeholder for empty optional cells
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

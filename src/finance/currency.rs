//! Currency formatting in the es-MX style (`$1,234.56`)

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a floating-point amount as Mexican pesos.
///
/// NaN has no sign or symbol; infinities keep both.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }

    match Decimal::from_f64_retain(amount) {
        Some(value) => format_decimal(value),
        // Beyond Decimal's range; whole pesos are all that matter there
        None => {
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{}${}.00", sign, group_thousands(&format!("{:.0}", amount.abs())))
        }
    }
}

/// Format a decimal amount as Mexican pesos, rounding half-to-even to cents.
pub fn format_decimal(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        cents
    )
}

fn group_thousands(whole: &str) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

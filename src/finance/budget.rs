//! 50/30/20 budget split

use rust_decimal::Decimal;
use serde::Serialize;

/// Share of income for essential spending (50%)
pub const NEEDS_SHARE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Share of income for discretionary spending (30%)
pub const WANTS_SHARE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Share of income set aside as savings (20%)
pub const SAVINGS_SHARE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Income divided into needs, wants and savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSplit {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

impl BudgetSplit {
    /// Sum of the three parts; always equal to the income that was split.
    pub fn total(&self) -> Decimal {
        self.needs + self.wants + self.savings
    }
}

/// Split `income` into 50% needs, 30% wants and 20% savings.
///
/// Savings absorbs any sub-cent remainder so the parts add up to `income`.
pub fn budget_split(income: Decimal) -> BudgetSplit {
    let needs = income * NEEDS_SHARE;
    let wants = income * WANTS_SHARE;
    let savings = income - needs - wants;

    BudgetSplit {
        needs,
        wants,
        savings,
    }
}

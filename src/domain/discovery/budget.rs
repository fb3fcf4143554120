//! Budget ceilings parsed from free-form range strings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Amount;

/// Upper price limit a finder is willing to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum BudgetCeiling {
    /// Open-ended range such as "₹10,000+".
    Unbounded,
    UpTo(Amount),
}

impl BudgetCeiling {
    /// Parses a budget string leniently.
    ///
    /// Thousands separators are stripped before digit runs are extracted,
    /// so "₹2,000 - ₹5,000" reads as 2000..5000. Returns `None` when the
    /// text holds no digits, which callers treat as "no budget filter".
    /// A `+` anywhere makes the ceiling unbounded. Otherwise the second
    /// number (the range's upper end) or the only number is the ceiling.
    pub fn parse_lenient(text: &str) -> Option<Self> {
        let cleaned: String = text.chars().filter(|c| *c != ',').collect();
        let numbers: Vec<&str> = cleaned
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .collect();

        if numbers.is_empty() {
            return None;
        }
        if text.contains('+') {
            return Some(BudgetCeiling::Unbounded);
        }

        let ceiling = numbers.get(1).unwrap_or(&numbers[0]);
        match ceiling.parse::<i64>().map(Amount::try_new) {
            Ok(Ok(amount)) => Some(BudgetCeiling::UpTo(amount)),
            // Larger than any representable price.
            _ => Some(BudgetCeiling::Unbounded),
        }
    }

    /// Returns true if `price` fits under this ceiling.
    pub fn admits(&self, price: Amount) -> bool {
        match self {
            BudgetCeiling::Unbounded => true,
            BudgetCeiling::UpTo(max) => price <= *max,
        }
    }
}

impl From<Amount> for BudgetCeiling {
    fn from(amount: Amount) -> Self {
        BudgetCeiling::UpTo(amount)
    }
}

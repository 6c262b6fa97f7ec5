//! Monetary amounts held as integer cents.

use serde::{Deserialize, Serialize};

/// Amount in the smallest currency unit (cents).
pub type MoneyCents = i64;

/// Default currency symbol used by `Display`.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// An integer amount of cents, rendered as a two-decimal currency value.
///
/// Compared by value; "changing" an amount means building a new one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(MoneyCents);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: MoneyCents) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> MoneyCents {
        self.0
    }

    /// Render as `-<symbol>1,234.56`: sign first, then the symbol, thousands
    /// separators and exactly two decimals.
    pub fn format_with(&self, symbol: &str) -> String {
        // unsigned_abs keeps i64::MIN representable.
        let abs = self.0.unsigned_abs();
        let units = group_thousands(abs / 100);
        let fraction = abs % 100;
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{sign}{symbol}{units}.{fraction:02}")
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl From<MoneyCents> for Money {
    fn from(value: MoneyCents) -> Self {
        Self(value)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

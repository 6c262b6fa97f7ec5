use core::str::FromStr;

use serde::{Deserialize, Serialize};

use msgproc_core::{DomainError, MoneyCents};

/// Operand of an adjustment: cents for `Add`/`Subtract`, a plain factor for
/// `Multiply`.
pub type AdjustmentAmount = i64;

/// Arithmetic applied by a price adjustment: `op(current_price, amount)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Apply the operation. Results saturate at the `i64` bounds.
    pub fn apply(self, current: MoneyCents, amount: AdjustmentAmount) -> MoneyCents {
        match self {
            Operation::Add => current.saturating_add(amount),
            Operation::Subtract => current.saturating_sub(amount),
            Operation::Multiply => current.saturating_mul(amount),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Subtract => "SUBTRACT",
            Operation::Multiply => "MULTIPLY",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADD" => Ok(Operation::Add),
            "SUBTRACT" => Ok(Operation::Subtract),
            "MULTIPLY" => Ok(Operation::Multiply),
            other => Err(DomainError::invalid_argument(format!(
                "unknown adjustment operation: {other:?}"
            ))),
        }
    }
}

/// A price adjustment targeting every sale currently recorded under `category`.
///
/// Immutable once created; kept only for the adjustment summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    category: String,
    operation: Operation,
    amount: AdjustmentAmount,
}

impl Adjustment {
    pub fn new(
        category: impl Into<String>,
        operation: Operation,
        amount: AdjustmentAmount,
    ) -> Self {
        Self {
            category: category.into(),
            operation,
            amount,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn amount(&self) -> AdjustmentAmount {
        self.amount
    }

    /// Price after this adjustment is applied to `price`.
    pub fn adjusted(&self, price: MoneyCents) -> MoneyCents {
        self.operation.apply(price, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(Operation::Add.apply(2, 5), 7);
        assert_eq!(Operation::Add.apply(-3, 3), 0);
        assert_eq!(Operation::Add.apply(-10, -45), -55);
    }

    #[test]
    fn subtract() {
        assert_eq!(Operation::Subtract.apply(2, 5), -3);
        assert_eq!(Operation::Subtract.apply(-3, 3), -6);
        assert_eq!(Operation::Subtract.apply(-10, -45), 35);
    }

    #[test]
    fn multiply() {
        assert_eq!(Operation::Multiply.apply(2, 5), 10);
        assert_eq!(Operation::Multiply.apply(-3, 3), -9);
        assert_eq!(Operation::Multiply.apply(-10, -45), 450);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(Operation::Add.apply(i64::MAX, 1), i64::MAX);
        assert_eq!(Operation::Subtract.apply(i64::MIN, 1), i64::MIN);
        assert_eq!(Operation::Multiply.apply(i64::MAX, -2), i64::MIN);
    }

    #[test]
    fn display_uses_report_names() {
        assert_eq!(Operation::Add.to_string(), "ADD");
        assert_eq!(Operation::Subtract.to_string(), "SUBTRACT");
        assert_eq!(Operation::Multiply.to_string(), "MULTIPLY");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("multiply".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!(" Add ".parse::<Operation>().unwrap(), Operation::Add);

        let err = "divide".parse::<Operation>().unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) if msg.contains("divide") => {}
            _ => panic!("Expected InvalidArgument for unknown operation"),
        }
    }

    #[test]
    fn adjustment_applies_its_operation() {
        let adjustment = Adjustment::new("cucumber", Operation::Multiply, 10);
        assert_eq!(adjustment.adjusted(-67), -670);
        assert_eq!(adjustment.category(), "cucumber");
    }
}

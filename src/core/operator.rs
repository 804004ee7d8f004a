//! The four binary operators and the arithmetic behind them.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator selected on the keypad.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in keypad column order from top to bottom.
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// The symbol printed on the button.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Look up an operator by its button symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Apply `op` to `a` and `b` in double precision.
///
/// Division by exactly zero (either sign) is refused with
/// [`CalcError::DivideByZero`]; every other case follows IEEE 754, so
/// overflow yields an infinity rather than an error.
///
/// # Example
///
/// ```rust
/// use reckon::core::{compute, Operator};
/// use reckon::error::CalcError;
///
/// assert_eq!(compute(5.0, 3.0, Operator::Add), Ok(8.0));
/// assert_eq!(compute(9.0, 0.0, Operator::Divide), Err(CalcError::DivideByZero));
/// ```
pub fn compute(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide if b == 0.0 => Err(CalcError::DivideByZero),
        Operator::Divide => Ok(a / b),
    }
}

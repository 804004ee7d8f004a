//! Errors raised while decoding and applying keypad input.

use crate::enforcement::OperandViolation;
use thiserror::Error;

/// Errors produced by the calculator itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The display could not be read as an operand when an operator or
    /// equals was pressed.
    #[error("Invalid number: '{input}'")]
    InvalidNumberFormat {
        input: String,
        violations: Vec<OperandViolation>,
    },

    /// Division with a right-hand operand of exactly zero.
    #[error("Cannot divide by zero!")]
    DivideByZero,
}

/// Errors decoding a button label into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Unknown button label '{0}'")]
    UnknownLabel(String),

    #[error("Digit {0} is out of range (expected 0-9)")]
    DigitOutOfRange(u8),
}

/// Errors surfaced to a shell driving a [`Dispatcher`](crate::keypad::Dispatcher).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_zero_message_is_fixed() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero!");
    }

    #[test]
    fn invalid_number_names_the_input() {
        let err = CalcError::InvalidNumberFormat {
            input: "1.2.3".to_string(),
            violations: Vec::new(),
        };
        assert_eq!(err.to_string(), "Invalid number: '1.2.3'");
    }

    #[test]
    fn dispatch_error_is_transparent() {
        let err: DispatchError = TokenError::UnknownLabel("%".to_string()).into();
        assert_eq!(err.to_string(), "Unknown button label '%'");

        let err: DispatchError = CalcError::DivideByZero.into();
        assert_eq!(err.to_string(), "Cannot divide by zero!");
    }
}

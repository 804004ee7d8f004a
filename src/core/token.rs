//! Keypad input tokens.
//!
//! Button labels are decoded into a [`Token`] exactly once, at the
//! boundary. Everything past that point matches on the enum.

use super::operator::Operator;
use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::fmt;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Digit(pub(crate) u8);

impl Digit {
    /// Create a digit, rejecting values above 9.
    pub fn new(value: u8) -> Result<Self, TokenError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(TokenError::DigitOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.value())
    }
}

/// One button press.
///
/// Serialized as the button label, so `"7"`, `"."`, `"+"`, `"="` and `"C"`
/// are the wire forms.
///
/// # Example
///
/// ```rust
/// use reckon::core::{Operator, Token};
///
/// assert_eq!(Token::from_label("*").unwrap(), Token::Operator(Operator::Multiply));
/// assert_eq!(Token::Clear.label(), "C");
/// assert!(Token::from_label("%").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Token {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
}

impl Token {
    /// Decode a button label.
    pub fn from_label(label: &str) -> Result<Self, TokenError> {
        match label {
            "." => return Ok(Self::DecimalPoint),
            "=" => return Ok(Self::Equals),
            "C" => return Ok(Self::Clear),
            _ => {}
        }

        let mut chars = label.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Err(TokenError::UnknownLabel(label.to_string()));
        };

        if let Some(value) = symbol.to_digit(10) {
            // to_digit(10) only yields 0..=9
            return Ok(Self::Digit(Digit(value as u8)));
        }

        Operator::from_symbol(symbol)
            .map(Self::Operator)
            .ok_or_else(|| TokenError::UnknownLabel(label.to_string()))
    }

    /// Shorthand for a digit token.
    pub fn digit(value: u8) -> Result<Self, TokenError> {
        Digit::new(value).map(Self::Digit)
    }

    /// The label printed on the button that produces this token.
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(digit) => DIGIT_LABELS[usize::from(digit.value())],
            Self::DecimalPoint => ".",
            Self::Operator(op) => op.label(),
            Self::Equals => "=",
            Self::Clear => "C",
        }
    }

    /// The character this token appends to the display, if any.
    ///
    /// Only digits and the decimal point extend the display.
    pub fn entry_char(self) -> Option<char> {
        match self {
            Self::Digit(digit) => Some(digit.as_char()),
            Self::DecimalPoint => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Clear => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Token {
    type Error = TokenError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.label().to_string()
    }
}

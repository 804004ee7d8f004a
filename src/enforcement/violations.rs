//! Operand violations and the policies that decide how they are handled.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reason display text was refused as an operand.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandViolation {
    #[error("Operand is empty")]
    Empty,

    #[error("Operand has {count} decimal points (at most one allowed)")]
    ExtraDecimalPoints { count: usize },

    #[error("Operand contains no digits")]
    NoDigits,

    #[error("Operand is not a number: '{text}'")]
    Unparsable { text: String },
}

/// How strictly typed operands are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Append whatever is typed; malformed text only fails when parsed.
    #[default]
    Permissive,

    /// Refuse a second decimal point while typing, and report every
    /// structural problem at once when the operand is read.
    Strict,
}

/// What the machine does after refusing an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidNumberStrategy {
    /// Return the error and leave the session untouched.
    #[default]
    Reject,

    /// Clear the session and raise an error notification.
    ClearAndNotify,
}

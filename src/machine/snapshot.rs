//! Observable state of a session.

use crate::core::number;
use crate::core::{Operator, Phase};
use serde::{Deserialize, Serialize};

/// Everything a session shows or remembers, minus its identity.
///
/// Numbers are serialized as display text so that `Infinity` and `NaN`
/// survive a JSON round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    #[serde(with = "number::as_text")]
    pub operand_a: f64,
    #[serde(with = "number::as_text")]
    pub operand_b: f64,
    #[serde(with = "number::as_text")]
    pub result: f64,
    pub pending: Option<Operator>,
    pub phase: Phase,
}

impl Snapshot {
    /// The state of a fresh or just-cleared session.
    pub fn initial() -> Self {
        Self {
            display: String::new(),
            operand_a: 0.0,
            operand_b: 0.0,
            result: 0.0,
            pending: None,
            phase: Phase::Idle,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

//! The calculator session: the imperative shell around the pure core.
//!
//! A [`Calculator`] owns the display buffer, both operands, the last result
//! and the pending operator. Tokens are applied one at a time with
//! [`Calculator::press`]; each press runs to completion and reports a
//! [`StepResult`].

mod calculator;
mod snapshot;

pub use calculator::{Calculator, StepResult};
pub use snapshot::Snapshot;

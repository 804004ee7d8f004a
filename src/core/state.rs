//! Machine phases.
//!
//! A calculator only ever sits in one of two coarse phases: idle, or holding
//! a left-hand operand while it waits for the right-hand one. The `State`
//! trait describes such phases so they can be named in logs and snapshots.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for calculator phases.
///
/// All methods are pure. Phases are small copyable values; the session
/// derives its current phase from the pending operator rather than storing
/// it separately.
///
/// Implement it by hand or with [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use reckon::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum EntryPhase {
///     Typing,
///     Waiting,
/// }
///
/// impl State for EntryPhase {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Typing => "Typing",
///             Self::Waiting => "Waiting",
///         }
///     }
///
///     fn awaits_operand(&self) -> bool {
///         matches!(self, Self::Waiting)
///     }
/// }
///
/// assert!(EntryPhase::Waiting.awaits_operand());
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Whether a left-hand operand has been captured and the machine is
    /// waiting for the right-hand one.
    fn awaits_operand(&self) -> bool;
}

crate::state_enum! {
    /// Coarse position of a calculator session.
    ///
    /// `Idle` holds exactly when no operator is pending. There is no
    /// terminal phase.
    #[derive(Default, Hash)]
    pub enum Phase {
        #[default]
        Idle,
        OperatorPending,
    }
    awaiting: [OperatorPending]
}

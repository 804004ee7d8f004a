//! Reckon: a sequential two-operand calculator engine
//!
//! Reckon models the logic behind a pocket-calculator window: a display,
//! seventeen buttons, and a single pending operator. Tokens go in one at a
//! time; display text comes out after each one. There is no expression
//! parser and no precedence: `5 + 3 = * 2 =` is two separate computations,
//! the second starting from the result of the first.
//!
//! # Core Concepts
//!
//! - **Token**: one button press, decoded once from its label
//! - **Calculator**: the session holding display, operands and result
//! - **Phase**: `Idle` or `OperatorPending`, derived from the pending operator
//! - **Notification**: the user-visible error raised when a division by zero
//!   clears the session
//!
//! # Example
//!
//! ```rust
//! use reckon::keypad::Dispatcher;
//! use reckon::machine::Calculator;
//! use reckon::notify::RecordingNotifier;
//!
//! let mut dispatcher = Dispatcher::new(Calculator::new(), RecordingNotifier::new());
//!
//! for label in ["5", "+", "3", "=", "*", "2"] {
//!     dispatcher.press(label).unwrap();
//! }
//! assert_eq!(dispatcher.press("=").unwrap(), "16.0");
//! ```

pub mod builder;
pub mod core;
pub mod enforcement;
pub mod error;
pub mod keypad;
pub mod machine;
pub mod notify;

// Re-export commonly used types
pub use builder::{CalculatorBuilder, CalculatorConfig};
pub use core::{Operator, Phase, State, Token};
pub use error::{CalcError, DispatchError, TokenError};
pub use keypad::Dispatcher;
pub use machine::{Calculator, Snapshot, StepResult};
pub use notify::{Notification, Notifier};

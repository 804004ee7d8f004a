//! Validation-based checks on operands read from the display.
//!
//! The calculator reads the display as a number whenever an operator or
//! equals is pressed. How forgiving that read is depends on the
//! [`NumberPolicy`]:
//!
//! - `Permissive` reproduces a plain keypad: anything can be typed, and
//!   text such as `1.2.3` only fails at the moment it is read.
//! - `Strict` uses Stillwater's `Validation` to accumulate ALL structural
//!   violations instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use reckon::enforcement::{InvalidNumberStrategy, NumberPolicy, OperandRules};
//!
//! let rules = OperandRules::new(NumberPolicy::Strict, InvalidNumberStrategy::Reject);
//!
//! assert!(rules.enforce("12.5").is_success());
//! assert!(rules.enforce("1..2.").is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::OperandRules;
pub use violations::{InvalidNumberStrategy, NumberPolicy, OperandViolation};

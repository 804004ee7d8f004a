//! Pure calculator core.
//!
//! This module holds everything that can be reasoned about without a
//! session:
//! - Phases of the machine via the `State` trait
//! - The closed set of keypad tokens
//! - The four arithmetic operators and `compute`
//! - Rendering and parsing of display text
//!
//! Nothing in here owns mutable state; the `machine` module is the shell
//! that applies tokens to a session.

pub mod number;
mod operator;
mod state;
mod token;

pub use operator::{compute, Operator};
pub use state::{Phase, State};
pub use token::{Digit, Token};

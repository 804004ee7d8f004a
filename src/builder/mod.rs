//! Builder API for configuring calculator sessions.
//!
//! This module provides a fluent builder, a serializable config and the
//! `state_enum!` macro used to declare phase enums.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::CalculatorConfig;
pub use error::BuildError;
pub use machine::CalculatorBuilder;

use crate::enforcement::{InvalidNumberStrategy, NumberPolicy};

/// Builder preset that checks operands strictly and clears with a
/// notification instead of returning an error.
///
/// # Example
///
/// ```
/// use reckon::builder::strict;
/// use reckon::core::Token;
/// use reckon::machine::StepResult;
///
/// let mut calc = strict().build().unwrap();
/// let step = calc.press(Token::Equals).unwrap();
/// assert!(matches!(step, StepResult::Cleared(_)));
/// ```
pub fn strict() -> CalculatorBuilder {
    CalculatorBuilder::new()
        .number_policy(NumberPolicy::Strict)
        .on_invalid_number(InvalidNumberStrategy::ClearAndNotify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;
    use crate::machine::StepResult;
    use crate::notify::NotificationKind;

    #[test]
    fn strict_preset_configures_rules() {
        let calc = strict().build().unwrap();
        assert_eq!(calc.rules().policy(), NumberPolicy::Strict);
        assert_eq!(
            calc.rules().violation_strategy(),
            InvalidNumberStrategy::ClearAndNotify
        );
    }

    #[test]
    fn strict_preset_notifies_on_empty_operand() {
        let mut calc = strict().build().unwrap();
        match calc.press(Token::Equals) {
            Ok(StepResult::Cleared(notification)) => {
                assert_eq!(notification.kind, NotificationKind::InvalidNumber);
            }
            other => panic!("Expected Cleared, got {other:?}"),
        }
    }
}

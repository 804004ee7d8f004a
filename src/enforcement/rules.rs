//! Operand rules using Validation.

use crate::core::number;
use crate::enforcement::violations::{InvalidNumberStrategy, NumberPolicy, OperandViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Rules applied whenever the display is read as an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperandRules {
    pub(crate) policy: NumberPolicy,
    pub(crate) on_invalid: InvalidNumberStrategy,
}

impl OperandRules {
    pub fn new(policy: NumberPolicy, on_invalid: InvalidNumberStrategy) -> Self {
        Self { policy, on_invalid }
    }

    /// Read `text` as an operand.
    ///
    /// Under [`NumberPolicy::Strict`] the structural checks run first and
    /// ALL of their violations are reported together. Under
    /// [`NumberPolicy::Permissive`] the only check is whether the text parses.
    pub fn enforce(&self, text: &str) -> Validation<f64, NonEmptyVec<OperandViolation>> {
        if self.policy == NumberPolicy::Strict {
            if let Validation::Failure(violations) = structural_checks(text) {
                return Validation::Failure(violations);
            }
        }

        match number::parse_operand(text) {
            Some(value) => Validation::success(value),
            None => Validation::fail(OperandViolation::Unparsable {
                text: text.to_string(),
            }),
        }
    }

    /// Whether `token_char` may be appended to `buffer` under this policy.
    pub fn allows_append(&self, buffer: &str, token_char: char) -> bool {
        match self.policy {
            NumberPolicy::Permissive => true,
            NumberPolicy::Strict => token_char != '.' || !buffer.contains('.'),
        }
    }

    pub fn policy(&self) -> NumberPolicy {
        self.policy
    }

    pub fn violation_strategy(&self) -> InvalidNumberStrategy {
        self.on_invalid
    }
}

fn structural_checks(text: &str) -> Validation<(), NonEmptyVec<OperandViolation>> {
    // Nothing else is worth reporting about an empty display.
    if text.is_empty() {
        return Validation::fail(OperandViolation::Empty);
    }

    let points = text.matches('.').count();
    let checks = vec![
        if points > 1 {
            Validation::fail(OperandViolation::ExtraDecimalPoints { count: points })
        } else {
            Validation::success(())
        },
        if text.chars().any(|c| c.is_ascii_digit()) {
            Validation::success(())
        } else {
            Validation::fail(OperandViolation::NoDigits)
        },
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> OperandRules {
        OperandRules::new(NumberPolicy::Strict, InvalidNumberStrategy::Reject)
    }

    fn violations_of(result: Validation<f64, NonEmptyVec<OperandViolation>>) -> Vec<OperandViolation> {
        match result {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(value) => panic!("Expected failures, got {value}"),
        }
    }

    #[test]
    fn permissive_accepts_well_formed_text() {
        let rules = OperandRules::default();
        let result = rules.enforce("12.5");
        assert!(result.is_success());
        if let Validation::Success(value) = result {
            assert_eq!(value, 12.5);
        }
    }

    #[test]
    fn permissive_reports_only_parse_failure() {
        let rules = OperandRules::default();
        let violations = violations_of(rules.enforce("1.2.3"));
        assert_eq!(
            violations,
            vec![OperandViolation::Unparsable {
                text: "1.2.3".to_string()
            }]
        );
    }

    #[test]
    fn strict_accumulates_all_structural_violations() {
        let violations = violations_of(strict().enforce(".."));
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| matches!(v, OperandViolation::ExtraDecimalPoints { count: 2 })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, OperandViolation::NoDigits)));
    }

    #[test]
    fn strict_reports_empty_alone() {
        assert_eq!(violations_of(strict().enforce("")), vec![OperandViolation::Empty]);
    }

    #[test]
    fn strict_accepts_rendered_results() {
        for text in ["16.0", "-3.5", "1.0E7", "0.30000000000000004"] {
            assert!(strict().enforce(text).is_success(), "{text} should pass");
        }
    }

    #[test]
    fn strict_rejects_non_numeric_results() {
        let violations = violations_of(strict().enforce("Infinity"));
        assert_eq!(violations, vec![OperandViolation::NoDigits]);
    }

    #[test]
    fn strict_blocks_second_decimal_point() {
        let rules = strict();
        assert!(rules.allows_append("12", '.'));
        assert!(!rules.allows_append("1.2", '.'));
        assert!(rules.allows_append("1.2", '3'));
    }

    #[test]
    fn permissive_allows_any_append() {
        assert!(OperandRules::default().allows_append("1.2", '.'));
    }

    #[test]
    fn violation_strategy_is_stored() {
        let rules = OperandRules::new(NumberPolicy::Permissive, InvalidNumberStrategy::ClearAndNotify);
        assert_eq!(rules.violation_strategy(), InvalidNumberStrategy::ClearAndNotify);
        assert_eq!(rules.policy(), NumberPolicy::Permissive);
    }
}

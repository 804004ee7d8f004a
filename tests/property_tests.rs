//! Property-based tests for the calculator session.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated keypad sequences.

use proptest::prelude::*;
use reckon::core::number::{parse_operand, render};
use reckon::core::{compute, Operator, Phase, Token};
use reckon::keypad;
use reckon::machine::{Calculator, Snapshot, StepResult};
use reckon::notify::NotificationKind;

prop_compose! {
    fn arbitrary_operator()(index in 0..4usize) -> Operator {
        Operator::ALL[index]
    }
}

prop_compose! {
    /// Digit labels with at most one decimal point spliced in.
    fn typed_number()(
        digits in prop::collection::vec(0..=9u8, 1..8),
        point in prop::option::of(0..8usize),
    ) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = digits
            .iter()
            .map(|d| Token::digit(*d).unwrap().label())
            .collect();
        if let Some(at) = point {
            labels.insert(at.min(labels.len()), ".");
        }
        labels
    }
}

fn arbitrary_label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(keypad::labels().collect::<Vec<_>>())
}

fn press_labels(calc: &mut Calculator, labels: &[&str]) -> Option<StepResult> {
    let mut last = None;
    for label in labels {
        last = calc.press(Token::from_label(label).unwrap()).ok();
    }
    last
}

proptest! {
    #[test]
    fn display_is_concatenation_of_typed_tokens(labels in typed_number()) {
        let mut calc = Calculator::new();
        press_labels(&mut calc, &labels);
        prop_assert_eq!(calc.display(), labels.concat());
    }

    #[test]
    fn compute_matches_native_arithmetic(
        a in -1.0e12..1.0e12f64,
        b in -1.0e12..1.0e12f64,
    ) {
        prop_assert_eq!(compute(a, b, Operator::Add), Ok(a + b));
        prop_assert_eq!(compute(a, b, Operator::Subtract), Ok(a - b));
        prop_assert_eq!(compute(a, b, Operator::Multiply), Ok(a * b));
    }

    #[test]
    fn compute_divides_by_non_zero(
        a in -1.0e12..1.0e12f64,
        b in prop::num::f64::NORMAL,
    ) {
        prop_assert_eq!(compute(a, b, Operator::Divide), Ok(a / b));
    }

    #[test]
    fn equals_shows_rendered_result(
        left in typed_number(),
        op in arbitrary_operator(),
        right in typed_number(),
    ) {
        let a = parse_operand(&left.concat()).unwrap();
        let b = parse_operand(&right.concat()).unwrap();
        prop_assume!(!(op == Operator::Divide && b == 0.0));

        let mut calc = Calculator::new();
        press_labels(&mut calc, &left);
        calc.press(Token::Operator(op)).unwrap();
        press_labels(&mut calc, &right);
        let step = calc.press(Token::Equals).unwrap();

        let expected = compute(a, b, op).unwrap();
        prop_assert_eq!(step, StepResult::Transitioned(Phase::Idle));
        prop_assert_eq!(calc.display(), render(expected));
        prop_assert_eq!(calc.operand_a(), expected);
        prop_assert_eq!(calc.pending(), None);
    }

    #[test]
    fn divide_by_zero_always_clears_and_notifies(
        left in typed_number(),
        zeros in 1..4usize,
    ) {
        let mut calc = Calculator::new();
        press_labels(&mut calc, &left);
        calc.press(Token::Operator(Operator::Divide)).unwrap();
        for _ in 0..zeros {
            calc.press(Token::digit(0).unwrap()).unwrap();
        }

        match calc.press(Token::Equals) {
            Ok(StepResult::Cleared(notification)) => {
                prop_assert_eq!(notification.kind, NotificationKind::DivideByZero);
                prop_assert_eq!(notification.message.as_str(), "Cannot divide by zero!");
            }
            other => prop_assert!(false, "Expected Cleared, got {:?}", other),
        }
        prop_assert_eq!(calc.snapshot(), Snapshot::initial());
    }

    #[test]
    fn clear_restores_initial_state(labels in prop::collection::vec(arbitrary_label(), 0..30)) {
        let mut calc = Calculator::new();
        press_labels(&mut calc, &labels);
        calc.press(Token::Clear).unwrap();
        prop_assert_eq!(calc.snapshot(), Snapshot::initial());
    }

    #[test]
    fn phase_tracks_pending_operator(labels in prop::collection::vec(arbitrary_label(), 0..30)) {
        let mut calc = Calculator::new();
        for label in labels {
            let _ = calc.press(Token::from_label(label).unwrap());
            let snapshot = calc.snapshot();
            prop_assert_eq!(snapshot.phase == Phase::Idle, snapshot.pending.is_none());
        }
    }

    #[test]
    fn rejected_operand_leaves_session_unchanged(labels in prop::collection::vec(arbitrary_label(), 0..30)) {
        let mut calc = Calculator::new();
        for label in labels {
            let before = calc.snapshot();
            if calc.press(Token::from_label(label).unwrap()).is_err() {
                prop_assert_eq!(calc.snapshot(), before);
            }
        }
    }

    #[test]
    fn rendered_values_chain_as_operands(value in prop::num::f64::ANY) {
        let text = render(value);
        let parsed = parse_operand(&text).unwrap();
        if value.is_nan() {
            prop_assert!(parsed.is_nan());
        } else {
            prop_assert_eq!(parsed, value);
        }
    }

    #[test]
    fn snapshot_roundtrip_serialization(labels in prop::collection::vec(arbitrary_label(), 0..20)) {
        let mut calc = Calculator::new();
        press_labels(&mut calc, &labels);
        let snapshot = calc.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        // NaN != NaN, so compare the re-serialized form.
        prop_assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }
}

//! Chained Arithmetic
//!
//! This example drives a calculator session token by token.
//!
//! Key concepts:
//! - Each press returns a step result and updates the display
//! - A result becomes the left-hand operand of the next operation
//! - Division by zero clears the session and raises a notification
//!
//! Run with: RUST_LOG=reckon=debug cargo run --example chained_arithmetic

use reckon::core::Token;
use reckon::machine::{Calculator, StepResult};
use tracing_subscriber::EnvFilter;

fn run(calc: &mut Calculator, labels: &[&str]) {
    for label in labels {
        let token = match Token::from_label(label) {
            Ok(token) => token,
            Err(err) => {
                println!("  {label:>2}  -> {err}");
                continue;
            }
        };

        match calc.press(token) {
            Ok(StepResult::Cleared(notification)) => {
                println!("  {label:>2}  -> [{}] {}", notification.title, notification.message);
            }
            Ok(StepResult::Ignored) => println!("  {label:>2}  -> (ignored)"),
            Ok(StepResult::Transitioned(_)) => println!("  {label:>2}  -> {:?}", calc.display()),
            Err(err) => println!("  {label:>2}  -> error: {err}"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Chained Arithmetic Example ===\n");

    let mut calc = Calculator::new();

    println!("5 + 3 = * 2 =");
    run(&mut calc, &["5", "+", "3", "=", "*", "2", "="]);

    println!("\n9 / 0 =");
    run(&mut calc, &["C", "9", "/", "0", "="]);

    println!("\n1.2.3 +");
    run(&mut calc, &["1", ".", "2", ".", "3", "+"]);

    println!("\n=== Example Complete ===");
}

//! Keypad Session
//!
//! This example shows how a window shell would sit on top of the engine.
//!
//! Key concepts:
//! - The keypad layout is data; the shell only renders labels
//! - A Dispatcher owns the session and decodes labels at the boundary
//! - Notifications go through the Notifier trait, and acknowledging one clears
//!
//! Run with: cargo run --example keypad_session -- 7 "*" 6 =

use reckon::builder::CalculatorConfig;
use reckon::keypad::{self, Dispatcher, COLUMNS};
use reckon::notify::{Notification, Notifier};
use reckon::CalculatorBuilder;
use tracing_subscriber::EnvFilter;

/// Prints notifications the way a modal dialog would show them.
struct ConsoleDialog {
    pending: bool,
}

impl Notifier for ConsoleDialog {
    fn notify(&mut self, notification: &Notification) {
        println!("+--------------------------+");
        println!("| {:<24} |", notification.title);
        println!("| {:<24} |", notification.message);
        println!("+--------------------------+");
        self.pending = true;
    }
}

fn print_keypad() {
    let labels: Vec<&str> = keypad::labels().collect();
    for row in labels.chunks(COLUMNS) {
        println!("  {}", row.join(" "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CalculatorConfig::from_json(r#"{ "max_entry_len": 15 }"#)
        .expect("built-in config is valid");
    let calculator = CalculatorBuilder::from_config(config)
        .build()
        .expect("built-in config builds");
    let mut dispatcher = Dispatcher::new(calculator, ConsoleDialog { pending: false });

    println!("=== Keypad Session Example ===\n");
    print_keypad();
    println!();

    let mut presses: Vec<String> = std::env::args().skip(1).collect();
    if presses.is_empty() {
        presses = ["1", "2", "/", "0", "=", "4", "2", "+", "8", "="]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    for label in &presses {
        let outcome = dispatcher.press(label).map(str::to_string);
        match outcome {
            Ok(display) => println!("[{display:>15}]  <- {label}"),
            Err(err) => println!("[{:>15}]  <- {label}: {err}", dispatcher.display()),
        }

        if dispatcher.notifier().pending {
            dispatcher.acknowledge();
            dispatcher.notifier_mut().pending = false;
            println!("(dialog dismissed)");
        }
    }

    println!("\n=== Example Complete ===");
}

//! Pocket Calculator
//!
//! This example drives a calculator the way a front-end would: every button
//! press goes in through `Calculator::press`, and a display listener renders
//! each new display string.
//!
//! Key concepts:
//! - Display listeners as the only output channel
//! - Repeated equals replaying the last operation
//! - Sticky error states cleared by the next digit press
//!
//! Run with: cargo run --example pocket_calculator
//! Set RUST_LOG=pocketcalc=trace to see every transition.

use pocketcalc::{CalculatorBuilder, Key, Operation};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Pocket Calculator Example ===");

    let mut calc = CalculatorBuilder::new()
        .listener(|display| println!("  [{display:>9}]"))
        .build()
        .unwrap();

    let add = Key::Operation(Operation::Add);
    let mul = Key::Operation(Operation::Multiply);
    let div = Key::Operation(Operation::Divide);

    let sessions = [
        (
            "5 + 3 =",
            vec![Key::Digit(5), add, Key::Digit(3), Key::Equals],
        ),
        (
            "2 + 3 = = (repeat)",
            vec![Key::Digit(2), add, Key::Digit(3), Key::Equals, Key::Equals],
        ),
        (
            "5 / 0 = then 1",
            vec![Key::Digit(5), div, Key::Digit(0), Key::Equals, Key::Digit(1)],
        ),
        (
            "9999 * 9999 * 9 =",
            vec![
                Key::Digit(9),
                Key::Digit(9),
                Key::Digit(9),
                Key::Digit(9),
                mul,
                Key::Digit(9),
                Key::Digit(9),
                Key::Digit(9),
                Key::Digit(9),
                mul,
                Key::Digit(9),
                Key::Equals,
            ],
        ),
    ];

    for (label, keys) in sessions {
        println!("\n--- {label} ---");
        for key in keys {
            calc.press(key).unwrap();
        }
    }

    println!("\nKeys recorded: {}", calc.history().len());
    println!("Final display: {}", calc.display_string());

    println!("\n=== Example Complete ===");
}

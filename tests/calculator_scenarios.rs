//! End-to-end button sequences a pocket calculator user would type.

use pocketcalc::{Calculator, CalculatorBuilder, Key, Operation, OverflowBound, Phase};
use std::sync::{Arc, Mutex};

fn keys(sequence: &str) -> Vec<Key> {
    sequence
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '+' => Key::Operation(Operation::Add),
            '-' => Key::Operation(Operation::Subtract),
            '*' => Key::Operation(Operation::Multiply),
            '/' => Key::Operation(Operation::Divide),
            '=' => Key::Equals,
            d => Key::Digit(d.to_digit(10).expect("test sequence digit") as u8),
        })
        .collect()
}

fn displays(calc: &mut Calculator, sequence: &str) -> Vec<String> {
    keys(sequence)
        .into_iter()
        .map(|key| {
            calc.press(key).unwrap();
            calc.display_string()
        })
        .collect()
}

fn final_display(sequence: &str) -> String {
    let mut calc = Calculator::new();
    displays(&mut calc, sequence).pop().unwrap_or_else(|| calc.display_string())
}

#[test]
fn simple_addition() {
    assert_eq!(final_display("5+3="), "8");
}

#[test]
fn division_by_zero_then_recovery() {
    let mut calc = Calculator::new();
    assert_eq!(displays(&mut calc, "5/0="), vec!["5", "5", "0", "error"]);
    assert_eq!(displays(&mut calc, "1"), vec!["1"]);
}

#[test]
fn repeated_multiplication_overflows() {
    let mut calc = Calculator::new();
    let shown = displays(&mut calc, "100*100=====");
    assert_eq!(shown[7], "10000");
    assert_eq!(shown[8], "1000000");
    assert_eq!(shown[9], "overflow");
    assert!(shown[10..].iter().all(|s| s == "overflow"));
}

#[test]
fn chained_equals_replays_operand() {
    let mut calc = Calculator::new();
    assert_eq!(displays(&mut calc, "2+3=="), vec!["2", "2", "3", "5", "8"]);
}

#[test]
fn long_chain_of_operations() {
    assert_eq!(final_display("12*3-6/5="), "6");
    assert_eq!(final_display("9-12*2="), "-6");
}

#[test]
fn overflow_then_operation_resets() {
    let mut calc = Calculator::new();
    displays(&mut calc, "99999999+1=");
    assert_eq!(calc.display_string(), "overflow");

    assert_eq!(displays(&mut calc, "+7="), vec!["0", "7", "7"]);
}

#[test]
fn negative_overflow_is_not_flagged_by_default() {
    // Only results at or above +10^8 overflow with the default bound.
    assert_eq!(final_display("0-99999999*2="), "-199999998");
}

#[test]
fn symmetric_bound_flags_negative_overflow() {
    let mut calc = CalculatorBuilder::new()
        .overflow_bound(OverflowBound::Symmetric)
        .build()
        .unwrap();
    let shown = displays(&mut calc, "0-99999999*2=");
    assert_eq!(shown.last().unwrap(), "overflow");
}

#[test]
fn front_end_listener_mirrors_display() {
    let screen = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&screen);
    let mut calc = CalculatorBuilder::new()
        .listener(move |s| *sink.lock().unwrap() = s.to_string())
        .build()
        .unwrap();

    for key in keys("48/6=") {
        calc.press(key).unwrap();
        assert_eq!(*screen.lock().unwrap(), calc.display_string());
    }
    assert_eq!(*screen.lock().unwrap(), "8");
}

#[test]
fn history_summarises_session() {
    let mut calc = Calculator::new();
    displays(&mut calc, "7*6=");

    let history = calc.history();
    assert_eq!(history.keys(), keys("7*6="));
    let last = history.last().unwrap();
    assert_eq!(last.display, "42");
    assert_eq!(last.to, Phase::Result);
    assert!(history.duration().is_some());
}

#[test]
fn calculator_can_move_between_threads() {
    let mut calc = Calculator::new();
    calc.press_digit(3).unwrap();
    let calc = std::thread::spawn(move || {
        calc.press_operation(Operation::Multiply);
        calc.press_digit(3).unwrap();
        calc.press_equals();
        calc
    })
    .join()
    .unwrap();
    assert_eq!(calc.display_string(), "9");
}

//! Pocketcalc: the arithmetic core of a four-function pocket calculator
//!
//! Pocketcalc models what happens behind the buttons of a classic pocket
//! calculator, decoupled from any user interface. A front-end forwards
//! button presses into a [`Calculator`] and renders the display strings it
//! is notified with.
//!
//! # Core Concepts
//!
//! - **Calculator**: Owns the accumulator, the typed input, and the pending
//!   operation; applies digit, operation, and equals presses
//! - **Listeners**: Callbacks that receive the display string after every press
//! - **Errors**: Division by zero and overflow are sticky display states,
//!   not failed calls; the next digit or operation press clears them
//! - **History**: A bounded record of the keys pressed and the phases visited
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::{Calculator, Operation};
//! use std::sync::{Arc, Mutex};
//!
//! let mut calc = Calculator::new();
//! let screen = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&screen);
//! calc.add_display_listener(move |display| *sink.lock().unwrap() = display.to_string());
//!
//! calc.press_digit(5).unwrap();
//! calc.press_operation(Operation::Divide);
//! calc.press_digit(0).unwrap();
//! calc.press_equals();
//! assert_eq!(*screen.lock().unwrap(), "error");
//!
//! calc.press_digit(1).unwrap();
//! assert_eq!(*screen.lock().unwrap(), "1");
//! ```

pub mod builder;
pub mod calculator;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use calculator::{Calculator, DisplayListener, DisplaySource};
pub use config::{CalculatorConfig, OverflowBound, MAX_DIGITS};
pub use self::core::{CalcError, InputError, Key, Operation, Phase, PressHistory, PressRecord};

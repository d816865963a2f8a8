//! The stateful calculator.
//!
//! This module is the imperative shell around [`crate::core`]: it owns the
//! accumulator and input, applies key presses, and notifies display
//! listeners after every transition.

mod listener;
mod machine;

pub use listener::DisplayListener;
pub use machine::{Calculator, DisplaySource};

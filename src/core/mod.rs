//! Core calculator value types.
//!
//! This module contains the pure pieces of the calculator:
//! - Operations and how they fold an input into the accumulator
//! - Keys (buttons) and the coarse phase the calculator is in
//! - Error kinds and the bounded key-press history
//!
//! Nothing in here owns mutable calculator state; that lives in
//! [`crate::calculator`].

mod error;
mod history;
mod key;
mod operation;
mod phase;

pub use error::{CalcError, InputError};
pub use history::{PressHistory, PressRecord};
pub use key::Key;
pub(crate) use key::validate_digit;
pub use operation::Operation;
pub use phase::Phase;

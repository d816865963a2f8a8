//! Coarse calculator modes.
//!
//! A `Phase` is a read-only summary of the calculator's flags, useful for
//! diagnostics and for the key-press history. It is derived, never stored.

use serde::{Deserialize, Serialize};

/// Which mode the calculator is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Typing a number; the input field is displayed.
    Entry,
    /// An operation was pressed; the accumulator is displayed.
    Pending,
    /// Equals was pressed; the next digit starts a new calculation.
    Result,
    /// Division by zero or overflow; the next digit or operation resets.
    Error,
}

impl Phase {
    /// Get the phase name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Entry => "Entry",
            Self::Pending => "Pending",
            Self::Result => "Result",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

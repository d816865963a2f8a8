//! Error types for calculator arithmetic and input.

use thiserror::Error;

/// Arithmetic failures that put the calculator into its error state.
///
/// The `Display` text is exactly what the calculator shows while the error
/// is active.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("error")]
    DivisionByZero,

    #[error("overflow")]
    Overflow,
}

/// Input rejected before it reaches the state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid digit {0}, expected a value in 0..=9")]
    InvalidDigit(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_errors_render_display_text() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "error");
        assert_eq!(CalcError::Overflow.to_string(), "overflow");
    }

    #[test]
    fn invalid_digit_names_the_value() {
        assert!(InputError::InvalidDigit(12).to_string().contains("12"));
    }
}

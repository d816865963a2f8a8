//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("max_digits must be between 1 and {max}, got {found}")]
    MaxDigitsOutOfRange { found: u32, max: u32 },
}

//! Calculator buttons.

use super::error::InputError;
use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// One button of the pocket calculator.
///
/// A front-end routes every button through [`Calculator::press`] with the
/// matching key: digit buttons become `Key::Digit`, `+ - * /` become
/// `Key::Operation`, and `=` becomes `Key::Equals`.
///
/// [`Calculator::press`]: crate::Calculator::press
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Key, Operation};
///
/// assert_eq!(Key::digit(7), Ok(Key::Digit(7)));
/// assert!(Key::digit(10).is_err());
/// assert_eq!(Key::from(Operation::Add).label(), "+");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Digit(u8),
    Operation(Operation),
    Equals,
}

impl Key {
    /// Build a digit key, rejecting values outside 0..=9.
    pub fn digit(value: u8) -> Result<Self, InputError> {
        validate_digit(value).map(Self::Digit)
    }

    /// The label printed on the button.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operation(op) => op.symbol().map(String::from).unwrap_or_default(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl From<Operation> for Key {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}

pub(crate) fn validate_digit(value: u8) -> Result<u8, InputError> {
    if value <= 9 {
        Ok(value)
    } else {
        Err(InputError::InvalidDigit(value))
    }
}

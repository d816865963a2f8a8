//! Arithmetic operations a pocket calculator can fold into its accumulator.

use super::error::CalcError;
use serde::{Deserialize, Serialize};

/// The operations the calculator can perform.
///
/// `None` is the "nothing pending" marker: folding with it simply assigns
/// the input to the accumulator, which is how the first operand of a
/// calculation is established.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{CalcError, Operation};
///
/// assert_eq!(Operation::None.apply(7, 5), Ok(5));
/// assert_eq!(Operation::Subtract.apply(7, 5), Ok(2));
/// assert_eq!(Operation::Divide.apply(7, 2), Ok(3));
/// assert_eq!(Operation::Divide.apply(7, 0), Err(CalcError::DivisionByZero));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation a button can select, in keypad order.
    pub const BUTTONS: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Fold `input` into `accumulator`.
    ///
    /// Division truncates toward zero. Results that do not fit in an `i64`
    /// are reported as [`CalcError::Overflow`]; the display bound check is
    /// the caller's job.
    pub fn apply(self, accumulator: i64, input: i64) -> Result<i64, CalcError> {
        let folded = match self {
            Self::None => Some(input),
            Self::Add => accumulator.checked_add(input),
            Self::Subtract => accumulator.checked_sub(input),
            Self::Multiply => accumulator.checked_mul(input),
            Self::Divide => {
                if input == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                accumulator.checked_div(input)
            }
        };
        folded.ok_or(CalcError::Overflow)
    }

    /// The keypad symbol, if this operation has a button.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Add => Some('+'),
            Self::Subtract => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }
}

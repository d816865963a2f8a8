//! Calculator configuration.

use serde::{Deserialize, Serialize};

/// Number of decimal digits the display can hold.
pub const MAX_DIGITS: u32 = 8;

/// Largest `max_digits` for which `10^max_digits` still fits in an `i64`.
pub const MAX_SUPPORTED_DIGITS: u32 = 18;

pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// How the overflow bound is applied to the accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowBound {
    /// `accumulator >= 10^max_digits`. Negative results are never flagged.
    #[default]
    Positive,
    /// `|accumulator| >= 10^max_digits`.
    Symmetric,
}

/// Tunables for a [`Calculator`](crate::Calculator).
///
/// Every field has a default, so partial configurations deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub max_digits: u32,
    pub overflow_bound: OverflowBound,
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_digits: MAX_DIGITS,
            overflow_bound: OverflowBound::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// `10^max_digits`, the first magnitude that overflows the display.
    ///
    /// Saturates for unvalidated configs; the builder rejects those.
    pub fn overflow_limit(&self) -> i64 {
        10_i64.checked_pow(self.max_digits).unwrap_or(i64::MAX)
    }

    /// Input may still grow by a digit while it is below this value.
    pub fn input_growth_limit(&self) -> i64 {
        10_i64
            .checked_pow(self.max_digits.saturating_sub(1))
            .unwrap_or(i64::MAX)
    }

    pub fn exceeds_bound(&self, accumulator: i64) -> bool {
        let limit = self.overflow_limit();
        match self.overflow_bound {
            OverflowBound::Positive => accumulator >= limit,
            OverflowBound::Symmetric => accumulator.unsigned_abs() >= limit.unsigned_abs(),
        }
    }
}

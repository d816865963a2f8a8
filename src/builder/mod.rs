//! Builder API for ergonomic calculator construction.
//!
//! # Example
//!
//! ```
//! use pocketcalc::builder::CalculatorBuilder;
//! use pocketcalc::config::OverflowBound;
//! use std::sync::{Arc, Mutex};
//!
//! let shown = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&shown);
//!
//! let mut calc = CalculatorBuilder::new()
//!     .max_digits(6)
//!     .overflow_bound(OverflowBound::Symmetric)
//!     .listener(move |display| *sink.lock().unwrap() = display.to_string())
//!     .build()
//!     .unwrap();
//!
//! calc.press_digit(4).unwrap();
//! assert_eq!(*shown.lock().unwrap(), "4");
//! ```

pub mod error;

pub use error::BuildError;

use crate::calculator::{Calculator, DisplayListener};
use crate::config::{CalculatorConfig, OverflowBound, MAX_SUPPORTED_DIGITS};

/// Builder for constructing calculators with a fluent API.
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    listeners: Vec<DisplayListener>,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            listeners: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_digits(mut self, digits: u32) -> Self {
        self.config.max_digits = digits;
        self
    }

    pub fn overflow_bound(mut self, bound: OverflowBound) -> Self {
        self.config.overflow_bound = bound;
        self
    }

    /// Number of key presses to retain; zero disables the history.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Register a display listener. Listeners run in registration order.
    pub fn listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.listeners.push(DisplayListener::new(listener));
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is out of range.
    pub fn build(self) -> Result<Calculator, BuildError> {
        validate(&self.config)?;
        let mut calculator = Calculator::from_validated(self.config);
        for listener in self.listeners {
            calculator.add_listener(listener);
        }
        Ok(calculator)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate(config: &CalculatorConfig) -> Result<(), BuildError> {
    if config.max_digits == 0 || config.max_digits > MAX_SUPPORTED_DIGITS {
        return Err(BuildError::MaxDigitsOutOfRange {
            found: config.max_digits,
            max: MAX_SUPPORTED_DIGITS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_uses_default_config() {
        let calc = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calc.config(), &CalculatorConfig::default());
        assert_eq!(calc.listener_count(), 0);
    }

    #[test]
    fn builder_rejects_zero_digits() {
        let result = CalculatorBuilder::new().max_digits(0).build();
        assert!(matches!(
            result,
            Err(BuildError::MaxDigitsOutOfRange { found: 0, .. })
        ));
    }

    #[test]
    fn builder_rejects_digits_beyond_i64() {
        let result = CalculatorBuilder::new().max_digits(19).build();
        assert!(matches!(
            result,
            Err(BuildError::MaxDigitsOutOfRange { found: 19, max: 18 })
        ));
    }

    #[test]
    fn fluent_api_applies_settings() {
        let calc = CalculatorBuilder::new()
            .max_digits(3)
            .overflow_bound(OverflowBound::Symmetric)
            .history_capacity(5)
            .listener(|_| {})
            .listener(|_| {})
            .build()
            .unwrap();

        assert_eq!(calc.config().max_digits, 3);
        assert_eq!(calc.config().overflow_bound, OverflowBound::Symmetric);
        assert_eq!(calc.history().capacity(), 5);
        assert_eq!(calc.listener_count(), 2);
    }

    #[test]
    fn config_replaces_previous_settings() {
        let config = CalculatorConfig {
            max_digits: 4,
            ..CalculatorConfig::default()
        };
        let calc = CalculatorBuilder::new()
            .max_digits(12)
            .config(config.clone())
            .build()
            .unwrap();
        assert_eq!(calc.config(), &config);
    }
}

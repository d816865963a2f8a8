//! The calculator state machine.

use crate::builder::{self, BuildError};
use crate::calculator::listener::DisplayListener;
use crate::config::CalculatorConfig;
use crate::core::{
    validate_digit, CalcError, InputError, Key, Operation, Phase, PressHistory, PressRecord,
};
use chrono::Utc;

/// Which numeric field the display shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplaySource {
    Input,
    Accumulator,
}

/// A four-function pocket calculator.
///
/// The calculator holds two numbers: the `input` being typed and the
/// `accumulator` carrying the running result. Only one of them is shown at
/// a time. Every key press notifies the registered listeners with the new
/// display string.
///
/// Division by zero and overflow do not fail the call; they put the
/// calculator into a sticky error state that the next digit or operation
/// press clears.
///
/// # Example
///
/// ```rust
/// use pocketcalc::{Calculator, Operation};
///
/// let mut calc = Calculator::new();
/// calc.press_digit(2).unwrap();
/// calc.press_operation(Operation::Add);
/// calc.press_digit(3).unwrap();
/// calc.press_equals();
/// assert_eq!(calc.display_string(), "5");
///
/// // Equals again repeats the last operation.
/// calc.press_equals();
/// assert_eq!(calc.display_string(), "8");
/// ```
#[derive(Debug)]
pub struct Calculator {
    config: CalculatorConfig,
    listeners: Vec<DisplayListener>,
    history: PressHistory,
    accumulator: i64,
    input: i64,
    stored_operand: i64,
    current_operation: Operation,
    stored_operation: Operation,
    display_source: DisplaySource,
    equals_pressed: bool,
    error: Option<CalcError>,
}

impl Calculator {
    /// Create a calculator with the default eight-digit configuration.
    pub fn new() -> Self {
        Self::from_validated(CalculatorConfig::default())
    }

    /// Create a calculator with a custom configuration.
    pub fn with_config(config: CalculatorConfig) -> Result<Self, BuildError> {
        builder::validate(&config)?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: CalculatorConfig) -> Self {
        tracing::debug!(
            max_digits = config.max_digits,
            overflow_bound = ?config.overflow_bound,
            history_capacity = config.history_capacity,
            "calculator created"
        );
        Self {
            history: PressHistory::with_capacity(config.history_capacity),
            config,
            listeners: Vec::new(),
            accumulator: 0,
            input: 0,
            stored_operand: 0,
            current_operation: Operation::None,
            stored_operation: Operation::None,
            display_source: DisplaySource::Input,
            equals_pressed: false,
            error: None,
        }
    }

    /// Press a digit button.
    ///
    /// Starts a fresh calculation after equals or an error. Digits beyond
    /// the display width are ignored, but listeners are still notified.
    pub fn press_digit(&mut self, digit: u8) -> Result<(), InputError> {
        let digit = validate_digit(digit)?;
        let from = self.phase();

        if self.equals_pressed || self.error.is_some() {
            self.reset();
        }

        if self.display_source == DisplaySource::Accumulator {
            self.display_source = DisplaySource::Input;
        }

        let value = i64::from(digit);
        if self.input == 0 {
            self.input = value;
        } else if self.input < self.config.input_growth_limit() {
            self.input = self.input * 10 + value;
        } else {
            tracing::debug!(input = self.input, digit, "display full, digit ignored");
        }

        self.finish(Key::Digit(digit), from);
        Ok(())
    }

    /// Press an operation button (`+ - * /`).
    ///
    /// Folds the typed number into the accumulator with the previously
    /// pending operation, unless equals was just pressed, in which case the
    /// accumulator already holds the result and only the new operation is
    /// recorded.
    pub fn press_operation(&mut self, operation: Operation) {
        let from = self.phase();

        if self.error.is_some() {
            self.reset();
        }

        if !self.equals_pressed {
            self.perform_operation();
            self.input = 0;
        }

        self.display_source = DisplaySource::Accumulator;
        self.current_operation = operation;
        self.equals_pressed = false;

        self.finish(Key::Operation(operation), from);
    }

    /// Press the equals button.
    ///
    /// Pressing it again right away replays the last operation with the
    /// last operand.
    pub fn press_equals(&mut self) {
        let from = self.phase();

        if self.equals_pressed {
            self.input = self.stored_operand;
            self.current_operation = self.stored_operation;
        }

        self.perform_operation();
        self.stored_operation = self.current_operation;
        self.stored_operand = self.input;
        self.current_operation = Operation::None;
        self.equals_pressed = true;
        self.display_source = DisplaySource::Accumulator;
        self.input = 0;

        self.finish(Key::Equals, from);
    }

    /// Press any button.
    pub fn press(&mut self, key: Key) -> Result<(), InputError> {
        match key {
            Key::Digit(d) => self.press_digit(d)?,
            Key::Operation(op) => self.press_operation(op),
            Key::Equals => self.press_equals(),
        }
        Ok(())
    }

    /// Register a callback that receives the display string after every
    /// key press. Listeners run in registration order.
    pub fn add_display_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.add_listener(DisplayListener::new(listener));
    }

    pub fn add_listener(&mut self, listener: DisplayListener) {
        self.listeners.push(listener);
    }

    /// The text currently on the display (pure).
    pub fn display_string(&self) -> String {
        match self.error {
            Some(error) => error.to_string(),
            None => self.display_value().to_string(),
        }
    }

    /// The number selected by the display source, ignoring any error.
    pub fn display_value(&self) -> i64 {
        match self.display_source {
            DisplaySource::Input => self.input,
            DisplaySource::Accumulator => self.accumulator,
        }
    }

    pub fn display_source(&self) -> DisplaySource {
        self.display_source
    }

    pub fn input(&self) -> i64 {
        self.input
    }

    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    /// The operation waiting for its right-hand operand.
    pub fn pending_operation(&self) -> Operation {
        self.current_operation
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the current phase (pure).
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.equals_pressed {
            Phase::Result
        } else if self.display_source == DisplaySource::Accumulator {
            Phase::Pending
        } else {
            Phase::Entry
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Get key-press history (pure)
    pub fn history(&self) -> &PressHistory {
        &self.history
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn perform_operation(&mut self) {
        match self.current_operation.apply(self.accumulator, self.input) {
            Ok(value) => {
                self.accumulator = value;
                if self.config.exceeds_bound(value) {
                    self.enter_error(CalcError::Overflow);
                }
            }
            Err(error) => self.enter_error(error),
        }
    }

    fn enter_error(&mut self, error: CalcError) {
        tracing::debug!(
            %error,
            accumulator = self.accumulator,
            input = self.input,
            operation = self.current_operation.name(),
            "calculator entered error state"
        );
        self.error = Some(error);
    }

    /// Return to the power-on state. Listeners and history are kept.
    fn reset(&mut self) {
        self.accumulator = 0;
        self.input = 0;
        self.stored_operand = 0;
        self.current_operation = Operation::None;
        self.stored_operation = Operation::None;
        self.display_source = DisplaySource::Input;
        self.equals_pressed = false;
        self.error = None;
    }

    fn finish(&mut self, key: Key, from: Phase) {
        let shown = self.display_string();
        let to = self.phase();
        tracing::trace!(
            key = ?key,
            from = from.name(),
            to = to.name(),
            display = %shown,
            "key pressed"
        );

        self.history.record(PressRecord {
            key,
            from,
            to,
            display: shown.clone(),
            timestamp: Utc::now(),
        });

        for listener in &mut self.listeners {
            listener.notify(&shown);
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

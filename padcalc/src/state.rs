//! Calculator state reducer
//!
//! Two-operand arithmetic driven one key at a time. There is no
//! precedence: an operator stores the typed operand and waits for the
//! second one, `=` combines them.

use crate::format::format_number;
use crate::keypad::{Button, Operator};
use thiserror::Error;
use tracing::{debug, warn};

/// Shown when a result has no numeric value.
pub const ERROR_TEXT: &str = "Error";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0:?} is not a number")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a number")]
    Undefined,
}

/// Where the reducer is in the two-operand cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// No operator pending; the display tracks the typed input.
    AwaitingOperand,
    /// An operator was pressed; typed digits form the right-hand operand.
    AwaitingSecondOperand {
        operator: Operator,
        previous_value: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    current_input: String,
    phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            current_input: String::new(),
            phase: Phase::AwaitingOperand,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pending operator, `None` when nothing is pending.
    pub fn operator(&self) -> Option<Operator> {
        match self.phase {
            Phase::AwaitingOperand => None,
            Phase::AwaitingSecondOperand { operator, .. } => Some(operator),
        }
    }

    /// Stored left-hand operand, `0.0` when nothing is pending.
    pub fn previous_value(&self) -> f64 {
        match self.phase {
            Phase::AwaitingOperand => 0.0,
            Phase::AwaitingSecondOperand { previous_value, .. } => previous_value,
        }
    }

    /// Apply one key press. Returns whether the display text changed.
    pub fn press(&mut self, button: Button) -> bool {
        let before = self.display.clone();

        match button {
            Button::Digit(c) => {
                let mut buf = [0u8; 4];
                self.digit(c.encode_utf8(&mut buf));
            }
            Button::Operator(op) => self.set_operator(op),
            Button::Equals => self.equals(),
            Button::Clear => self.clear(),
        }

        self.display != before
    }

    /// Append a digit or `.` to the input. A lone `"0"` is replaced
    /// rather than extended, unless a decimal point follows it. Callers
    /// pass only `0`-`9` or `.`; [`on_digit`](Self::on_digit) checks labels.
    fn digit(&mut self, d: &str) {
        if self.current_input == "0" && d != "." {
            self.current_input = d.to_string();
        } else {
            self.current_input.push_str(d);
        }
        self.display = self.current_input.clone();
        debug!(input = %self.current_input, "digit");
    }

    /// Store the typed operand and wait for the second one. The display
    /// shows the operator symbol until the next digit arrives.
    pub fn set_operator(&mut self, op: Operator) {
        let previous_value = parse_operand(&self.current_input);
        self.phase = Phase::AwaitingSecondOperand {
            operator: op,
            previous_value,
        };
        self.current_input.clear();
        self.display = op.symbol().to_string();
        debug!(operator = op.symbol(), previous_value, "operator");
    }

    /// Combine the stored operand with the typed one. Without a pending
    /// operator this does nothing.
    pub fn equals(&mut self) {
        let Phase::AwaitingSecondOperand {
            operator,
            previous_value,
        } = self.phase
        else {
            debug!("equals with no pending operator");
            return;
        };

        let current = parse_operand(&self.current_input);
        let text = match evaluate(previous_value, operator, current) {
            Ok(result) => format_number(result),
            Err(err) => {
                debug!(
                    %err,
                    previous_value,
                    operator = operator.symbol(),
                    current,
                    "evaluation failed"
                );
                ERROR_TEXT.to_string()
            }
        };

        self.display = text.clone();
        self.current_input = text;
        self.phase = Phase::AwaitingOperand;
        debug!(display = %self.display, "equals");
    }

    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.current_input.clear();
        self.phase = Phase::AwaitingOperand;
        debug!("clear");
    }

    /// Label-level entry points for a rendering layer that only knows
    /// the text printed on the tapped key.
    ///
    /// Anything but a single digit or `.` leaves the state untouched.
    pub fn on_digit(&mut self, text: &str) {
        match Button::from_label(text) {
            Ok(Button::Digit(_)) => self.digit(text),
            _ => warn!(label = text, "ignoring non-digit key"),
        }
    }

    /// Unrecognised symbols leave the state untouched.
    pub fn on_operator(&mut self, text: &str) {
        match Operator::from_symbol(text) {
            Some(op) => self.set_operator(op),
            None => warn!(symbol = text, "ignoring unknown operator"),
        }
    }

    pub fn on_equals(&mut self) {
        self.equals();
    }

    pub fn on_clear(&mut self) {
        self.clear();
    }
}

/// `previous <operator> current`. Division by exactly zero and any
/// not-a-number result are errors.
pub fn evaluate(previous: f64, operator: Operator, current: f64) -> Result<f64, ArithmeticError> {
    let result = match operator {
        Operator::Add => previous + current,
        Operator::Subtract => previous - current,
        Operator::Multiply => previous * current,
        Operator::Divide => {
            if current == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            previous / current
        }
    };
    if result.is_nan() {
        return Err(ArithmeticError::Undefined);
    }
    Ok(result)
}

pub fn parse_input(text: &str) -> Result<f64, InputError> {
    text.parse::<f64>()
        .map_err(|_| InputError::Malformed(text.to_string()))
}

/// Operand value of the typed input. Empty or malformed input (for
/// example `"1.2.3"` or a previous `"Error"`) counts as zero.
fn parse_operand(text: &str) -> f64 {
    match parse_input(text) {
        Ok(value) => value,
        Err(err) => {
            if !text.is_empty() {
                warn!(%err, "treating operand as 0");
            }
            0.0
        }
    }
}

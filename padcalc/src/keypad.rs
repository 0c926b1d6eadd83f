//! Button alphabet and keypad layout

use egui::Key;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("no key is labelled {0:?}")]
    UnknownLabel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// One tap on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
}

impl Button {
    pub fn from_label(label: &str) -> Result<Self, KeyError> {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Ok(Button::Digit(c));
            }
        }
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Button::Operator(op));
        }
        match label {
            "=" => Ok(Button::Equals),
            "C" => Ok(Button::Clear),
            _ => Err(KeyError::UnknownLabel(label.to_string())),
        }
    }

    pub fn label(self) -> String {
        match self {
            Button::Digit(c) => c.to_string(),
            Button::Operator(op) => op.symbol().to_string(),
            Button::Equals => "=".to_string(),
            Button::Clear => "C".to_string(),
        }
    }
}

/// Keypad rows, top to bottom.
pub const KEYPAD_ROWS: &[&[&str]] = &[
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "=", "+"],
    &["C"],
];

/// Map a physical key press to the keypad button it stands for.
pub fn button_for_key(key: Key, shift: bool) -> Option<Button> {
    let button = match key {
        Key::Num0 => Button::Digit('0'),
        Key::Num1 => Button::Digit('1'),
        Key::Num2 => Button::Digit('2'),
        Key::Num3 => Button::Digit('3'),
        Key::Num4 => Button::Digit('4'),
        Key::Num5 => Button::Digit('5'),
        Key::Num6 => Button::Digit('6'),
        Key::Num7 => Button::Digit('7'),
        Key::Num8 if shift => Button::Operator(Operator::Multiply),
        Key::Num8 => Button::Digit('8'),
        Key::Num9 => Button::Digit('9'),
        Key::Period => Button::Digit('.'),
        Key::Plus => Button::Operator(Operator::Add),
        Key::Equals if shift => Button::Operator(Operator::Add),
        Key::Minus => Button::Operator(Operator::Subtract),
        Key::Slash => Button::Operator(Operator::Divide),
        Key::Enter | Key::Equals => Button::Equals,
        Key::Escape | Key::C => Button::Clear,
        _ => return None,
    };
    Some(button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keypad_label_parses() {
        for row in KEYPAD_ROWS {
            for label in *row {
                let button = Button::from_label(label).unwrap();
                assert_eq!(button.label(), *label);
            }
        }
    }

    #[test]
    fn test_keypad_shape() {
        assert_eq!(KEYPAD_ROWS.len(), 5);
        assert_eq!(KEYPAD_ROWS[3], &["0", ".", "=", "+"]);
        assert_eq!(KEYPAD_ROWS[4], &["C"]);
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(
            Button::from_label("%"),
            Err(KeyError::UnknownLabel("%".to_string()))
        );
        assert!(Button::from_label("12").is_err());
        assert!(Button::from_label("").is_err());
        assert!(Button::from_label("c").is_err());
    }

    #[test]
    fn test_operator_symbols() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("^"), None);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(button_for_key(Key::Num7, false), Some(Button::Digit('7')));
        assert_eq!(button_for_key(Key::Num8, true), Some(Button::Operator(Operator::Multiply)));
        assert_eq!(button_for_key(Key::Equals, true), Some(Button::Operator(Operator::Add)));
        assert_eq!(button_for_key(Key::Equals, false), Some(Button::Equals));
        assert_eq!(button_for_key(Key::Enter, false), Some(Button::Equals));
        assert_eq!(button_for_key(Key::Escape, false), Some(Button::Clear));
        assert_eq!(button_for_key(Key::Period, false), Some(Button::Digit('.')));
        assert_eq!(button_for_key(Key::Backspace, false), None);
    }
}

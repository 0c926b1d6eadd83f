//! Keypad calculator: button alphabet, state reducer and the egui screen

pub mod app;
pub mod format;
pub mod keypad;
pub mod state;

pub use keypad::{Button, Operator};
pub use state::CalculatorState;

//! padcore — shared plumbing for the padcalc keypad calculator

pub mod config;
pub mod logging;
pub mod repaint;
pub mod theme;
pub mod widgets;

pub use config::PadConfig;
pub use repaint::RepaintController;
pub use theme::PadTheme;

//! Keypad widgets — white keys, 1px outline, inverted when pressed

use crate::theme::PadColors;
use egui::{Response, Ui, Widget};

/// A single keypad key.
///
/// Accent keys are drawn inverted at rest and return to white while held.
pub struct KeyButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    accent: bool,
    font_size: f32,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self {
            label,
            size,
            accent: false,
            font_size: 22.0,
        }
    }

    pub fn accent(mut self, accent: bool) -> Self {
        self.accent = accent;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

/// Whether a key is drawn inverted (black fill, white text).
fn inverted(accent: bool, pressed: bool) -> bool {
    accent != pressed
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let invert = inverted(self.accent, response.is_pointer_button_down_on());
            let (fill, text) = if invert {
                (PadColors::BLACK, PadColors::WHITE)
            } else {
                (PadColors::WHITE, PadColors::BLACK)
            };

            painter.rect_filled(rect, 0.0, fill);
            let stroke_width = if response.hovered() { 2.0 } else { 1.0 };
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(stroke_width, PadColors::BLACK));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                text,
            );
        }

        response
    }
}

/// Read-only result display: right-aligned, bold, boxed.
pub fn display_panel(ui: &mut Ui, text: &str, font_size: f32) {
    let height = font_size + 20.0;
    egui::Frame::none()
        .fill(PadColors::WHITE)
        .stroke(egui::Stroke::new(1.0, PadColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
        .show(ui, |ui| {
            ui.set_min_height(height);
            ui.set_max_height(height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .font(egui::FontId::proportional(font_size))
                        .color(PadColors::BLACK)
                        .strong(),
                );
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion() {
        assert!(!inverted(false, false));
        assert!(inverted(false, true));
        assert!(inverted(true, false));
        assert!(!inverted(true, true));
    }
}

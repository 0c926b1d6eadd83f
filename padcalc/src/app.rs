//! Keypad screen

use crate::keypad::{button_for_key, Button, KEYPAD_ROWS};
use crate::state::CalculatorState;
use egui::Context;
use padcore::theme::{consume_special_keys, menu_bar, PadColors};
use padcore::widgets::{display_panel, KeyButton};
use padcore::{PadConfig, RepaintController};
use tracing::warn;

pub struct PadCalcApp {
    state: CalculatorState,
    config: PadConfig,
    show_about: bool,
    repaint: RepaintController,
}

impl PadCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: PadConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: PadConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    fn press(&mut self, button: Button) {
        if self.state.press(button) {
            self.repaint.notify_changed();
        }
    }

    fn press_label(&mut self, label: &str) {
        match Button::from_label(label) {
            Ok(button) => self.press(button),
            Err(err) => warn!(%err, "ignoring key"),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let pressed: Vec<Button> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if !modifiers.command => button_for_key(*key, modifiers.shift),
                    _ => None,
                })
                .collect()
        });

        for button in pressed {
            self.press(button);
        }
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let key_h = self.config.key_height;
        let font_size = (key_h * 0.5).max(12.0);
        let mut tapped = None;

        for row in KEYPAD_ROWS {
            let n = row.len() as f32;
            let key_w = (ui.available_width() - spacing * (n - 1.0)) / n;
            ui.horizontal(|ui| {
                for &label in *row {
                    let key = KeyButton::new(label, egui::vec2(key_w, key_h))
                        .accent(label == "=")
                        .font_size(font_size);
                    if ui.add(key).clicked() {
                        tapped = Some(label);
                    }
                }
            });
        }

        if let Some(label) = tapped {
            self.press_label(label);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.separator();
                ui.label("keys: 0-9 . + - * /");
                ui.label("Enter or = to evaluate");
                ui.label("Esc or C to clear");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for PadCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame();
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("clear").clicked() {
                        self.press(Button::Clear);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(PadColors::WHITE)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                display_panel(ui, self.state.display(), self.config.display_font_size);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
        self.repaint.end_frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taps_drive_display() {
        let mut app = PadCalcApp::with_config(PadConfig::default());
        for label in ["7", "+", "3", "="] {
            app.press_label(label);
        }
        assert_eq!(app.display(), "10.0");
        assert!(app.repaint.is_dirty());
    }

    #[test]
    fn test_unchanged_display_is_not_reported() {
        let mut app = PadCalcApp::with_config(PadConfig::default());
        app.press_label("C");
        app.press_label("=");
        assert_eq!(app.display(), "0");
        assert!(!app.repaint.is_dirty());
    }

    #[test]
    fn test_unknown_label_ignored() {
        let mut app = PadCalcApp::with_config(PadConfig::default());
        app.press_label("sqrt");
        assert_eq!(app.display(), "0");
        assert!(!app.repaint.is_dirty());
        app.press_label("9");
        app.press_label("sqrt");
        assert_eq!(app.display(), "9");
    }

    #[test]
    fn test_keyboard_matches_taps() {
        let ctx = Context::default();
        let mut app = PadCalcApp::with_config(PadConfig::default());
        let key = |key, shift| egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers {
                shift,
                ..Default::default()
            },
        };
        let input = egui::RawInput {
            events: vec![
                key(egui::Key::Num9, false),
                key(egui::Key::Slash, false),
                key(egui::Key::Num0, false),
                key(egui::Key::Enter, false),
            ],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.handle_keys(ctx));
        assert_eq!(app.display(), "Error");
    }
}

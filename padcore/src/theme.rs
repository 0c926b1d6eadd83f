//! Keypad theme
//!
//! Black and white, 1px black outlines, square corners. The only
//! emphasis is inversion: black fill with white text.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct PadColors;

impl PadColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for the keypad window
pub struct PadTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub font_size_key: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for PadTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            font_size_key: 22.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl PadTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_key, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = PadColors::WHITE;
        visuals.panel_fill = PadColors::WHITE;
        visuals.faint_bg_color = PadColors::WHITE;
        visuals.extreme_bg_color = PadColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, PadColors::BLACK);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = PadColors::WHITE;
            ws.weak_bg_fill = PadColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, PadColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, PadColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(PadColors::WHITE)
        .stroke(Stroke::new(1.0, PadColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Strip Tab and Cmd+/Cmd- events before the keypad reads input.
///
/// Tab would cycle focus between keys and Cmd+/- would rescale the UI;
/// neither means anything on a calculator.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
            }
            _ => true,
        });
    });
}

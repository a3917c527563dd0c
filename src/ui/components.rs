//! Reusable UI components
//!
//! Standalone widgets used by the stars page and the create dialog.

use crate::theme;
use eframe::egui;

/// Tinted full-width alert box
fn alert(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, color.gamma_multiply(0.5)))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(egui::Label::new(egui::RichText::new(icon).color(color)).selectable(false));
                ui.add(egui::Label::new(
                    egui::RichText::new(text).color(theme::TEXT_SECONDARY).size(theme::FONT_BODY),
                ));
            });
        });
}

/// Success banner shown after a star was created
pub fn success_banner(ui: &mut egui::Ui, text: &str) {
    alert(ui, egui_phosphor::regular::CHECK_CIRCLE, text, theme::STATUS_SUCCESS);
}

/// Error line with a dismiss button. Returns true if dismissed.
pub fn error_banner(ui: &mut egui::Ui, text: &str) -> bool {
    let mut dismissed = false;
    ui.horizontal(|ui| {
        let width = ui.available_width() - 40.0;
        ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
            alert(ui, egui_phosphor::regular::WARNING, text, theme::STATUS_ERROR);
        });
        if ui
            .add(egui::Button::new(egui_phosphor::regular::X).frame(false))
            .on_hover_text("Dismiss")
            .clicked()
        {
            dismissed = true;
        }
    });
    dismissed
}

/// Small filled circle in the star's colour
pub fn color_swatch(ui: &mut egui::Ui, color: &str) {
    let (_, fg) = theme::star_colors(color);
    let size = 10.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().circle_filled(rect.center(), size / 2.0, fg);
    }
    response.on_hover_text(color);
}

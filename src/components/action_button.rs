use eframe::egui;

use crate::action::Action;
use crate::palette::ACTION_BORDER;

/// Outlined button of the actions grid
pub struct ActionButton {
    pub action: Action,
}

impl ActionButton {
    pub fn new(action: Action) -> Self {
        Self { action }
    }

    pub fn show(&self, ui: &mut egui::Ui, rect: egui::Rect) -> egui::Response {
        let response = ui
            .allocate_rect(rect, egui::Sense::click())
            .on_hover_text(self.action.tooltip());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            if response.hovered() {
                painter.rect_filled(rect, 0.0, egui::Color32::from_gray(220));
            }
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.action.label(),
                egui::FontId::monospace(16.0),
                egui::Color32::BLACK,
            );
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, ACTION_BORDER));
        }

        response
    }
}

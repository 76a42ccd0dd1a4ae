use eframe::egui;

use crate::palette::{BUTTON_BORDER, SELECTED_BORDER};

/// One palette color
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui, rect: egui::Rect) -> egui::Response {
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, self.color);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, BUTTON_BORDER));
            if self.selected {
                painter.rect_stroke(rect.shrink(2.0), 0.0, egui::Stroke::new(2.0, SELECTED_BORDER));
            }
        }

        response
    }
}

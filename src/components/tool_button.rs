use eframe::egui;

use crate::palette::{BUTTON_BORDER, SELECTED_BORDER};
use crate::tools::{Tool, ToolKind};

/// Toolbar button showing a tool's icon at a fixed screen rectangle
pub struct ToolButton<'a> {
    pub tool: ToolKind,
    pub icon: Option<&'a egui::TextureHandle>,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(tool: ToolKind, icon: Option<&'a egui::TextureHandle>, selected: bool) -> Self {
        Self {
            tool,
            icon,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, rect: egui::Rect) -> egui::Response {
        let response = ui
            .allocate_rect(rect, egui::Sense::click())
            .on_hover_text(self.tool.name());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            match self.icon {
                Some(icon) => {
                    // Icons are drawn unscaled, inset by 4px
                    let icon_rect = egui::Rect::from_min_size(
                        rect.min + egui::vec2(4.0, 4.0),
                        icon.size_vec2(),
                    );
                    painter.image(
                        icon.id(),
                        icon_rect,
                        egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                None => {
                    let initial = &self.tool.name()[..1];
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        initial,
                        egui::FontId::proportional(16.0),
                        egui::Color32::BLACK,
                    );
                }
            }

            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, BUTTON_BORDER));
            if self.selected {
                painter.rect_stroke(rect.shrink(1.0), 0.0, egui::Stroke::new(2.0, SELECTED_BORDER));
            }
        }

        response
    }
}

use eframe::egui::{self, Color32};

use crate::palette;

/// A clickable color square. The selected swatch gets a dashed border in
/// the inverse of its color so it stays visible on any fill.
pub struct ColorSwatch {
    color: Color32,
    selected: bool,
    size: f32,
}

impl ColorSwatch {
    pub fn new(color: Color32, selected: bool) -> Self {
        Self {
            color,
            selected,
            size: 25.0,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(self.size, self.size), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, self.color);

            if self.selected {
                let stroke = egui::Stroke::new(2.0, palette::highlight_color(self.color));
                let r = rect.shrink(1.0);
                let outline = [r.left_top(), r.right_top(), r.right_bottom(), r.left_bottom(), r.left_top()];
                painter.extend(egui::Shape::dashed_line(&outline, stroke, 2.0, 2.0));
            } else if response.hovered() {
                painter.rect_stroke(rect, 0.0, ui.visuals().widgets.hovered.fg_stroke);
            }
        }

        response
    }
}

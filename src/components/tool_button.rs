use eframe::egui;

/// Square toolbar button with an icon that stays highlighted while checked
pub struct ToolButton<'a> {
    pub icon: &'a str,
    pub tooltip: String,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(icon: &'a str, tooltip: impl Into<String>, selected: bool) -> Self {
        Self {
            icon,
            tooltip: tooltip.into(),
            selected,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(28.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);

            ui.painter().rect_filled(rect, 4.0, visuals.weak_bg_fill);

            let font_id = egui::FontId::proportional(18.0);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                font_id,
                visuals.text_color(),
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
                );
            }
        }

        response.on_hover_text(self.tooltip)
    }
}

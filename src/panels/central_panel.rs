use eframe::egui;

use crate::PaintApp;

/// The drawing surface. Fills whatever space the other panels leave.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(200)))
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());
            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            app.sync_surface(canvas_rect);
            app.handle_input(ctx, canvas_rect, response.contains_pointer());

            let painter = ui.painter_at(canvas_rect);
            app.render_canvas(ctx, &painter, canvas_rect);
        });
}

use eframe::egui;

use crate::PaintApp;
use crate::command::Command;
use crate::components::ColorSwatch;
use crate::i18n::Label;
use crate::palette::PALETTE;

/// Right-hand group of palette swatches
pub fn color_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let session = app.session();
    let selected = session.color_index();
    let mut picked = None;

    egui::SidePanel::right("color_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading(session.language().tr(Label::Colors));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(3.0, 3.0);
                    for (index, entry) in PALETTE.iter().enumerate() {
                        let response = ColorSwatch::new(entry.color, selected == Some(index))
                            .show(ui)
                            .on_hover_text(entry.name);
                        if response.clicked() {
                            picked = Some(index);
                        }
                    }
                });
            });
        });

    if let Some(index) = picked {
        log::info!("Color selected from UI: {}", PALETTE[index].name);
        app.execute_command(ctx, Command::SelectColor(index));
    }
}

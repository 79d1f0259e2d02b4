use eframe::egui;

use crate::PaintApp;
use crate::command::Command;
use crate::components::{ColorSwatch, ToolButton};
use crate::file_handler::FileHandler;
use crate::i18n::{Label, Language};
use crate::pen::PenSize;
use crate::tools::ToolKind;

fn size_label(size: PenSize) -> Label {
    match size {
        PenSize::Small => Label::SizeSmall,
        PenSize::Medium => Label::SizeMedium,
        PenSize::Large => Label::SizeLarge,
    }
}

/// Top strip: file actions, tools, pen size, current color and language
pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    let session = app.session();
    let language = session.language();
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.label(language.tr(Label::File));
            if ToolButton::new("💾", language.tr(Label::Save), false).show(ui).clicked() {
                if let Some(path) = FileHandler::pick_save_path(language) {
                    commands.push(Command::SaveTo(path));
                }
            }
            if ToolButton::new("📂", language.tr(Label::Load), false).show(ui).clicked() {
                if let Some(path) = FileHandler::pick_load_path(language) {
                    commands.push(Command::LoadFrom(path));
                }
            }
            ui.separator();

            ui.label(language.tr(Label::Tools));
            for kind in ToolKind::ALL {
                let selected = session.tools().is_active(kind);
                if ToolButton::new(kind.icon(), language.tr(kind.label()), selected).show(ui).clicked() {
                    log::info!("Tool clicked: {:?}", kind);
                    commands.push(Command::ToggleTool(kind));
                }
            }
            if ToolButton::new("🗑", language.tr(Label::Clear), false).show(ui).clicked() {
                commands.push(Command::ClearCanvas);
            }
            ui.separator();

            ui.label(language.tr(Label::Size));
            let current = session.pen_size();
            egui::ComboBox::from_id_salt("pen_size")
                .selected_text(language.tr(size_label(current)))
                .show_ui(ui, |ui| {
                    for size in PenSize::ALL {
                        if ui.selectable_label(size == current, language.tr(size_label(size))).clicked() {
                            commands.push(Command::SetPenSize(size));
                        }
                    }
                });
            ui.separator();

            ui.label(language.tr(Label::Color));
            ColorSwatch::new(session.pen().color(), false).size(20.0).show(ui);
            ui.separator();

            ui.label(language.tr(Label::Language));
            for option in Language::ALL {
                let button = ToolButton::new(option.badge(), language.tr(option.label()), option == language);
                if button.show(ui).clicked() && option != language {
                    commands.push(Command::SetLanguage(option));
                }
            }
        });
    });

    for command in commands {
        app.execute_command(ctx, command);
    }
}

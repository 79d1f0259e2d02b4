#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use mini_paint::{Label, Language, PaintApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(Label::AppTitle.text(Language::English))
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "mini_paint",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )
}

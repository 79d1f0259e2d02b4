use eframe::egui;

use crate::command::Command;
use crate::i18n::Label;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::session::PaintSession;
use crate::settings::Settings;

/// Canvas size before the first layout pass tells us the real surface size
const INITIAL_CANVAS: [u32; 2] = [640, 480];

pub struct PaintApp {
    session: PaintSession,
    renderer: Renderer,
    input: InputHandler,
    /// Localised message shown in the error window until dismissed
    error_message: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous settings (if any).
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with settings {:?}", settings);
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        let [width, height] = INITIAL_CANVAS;
        Self {
            session: PaintSession::with_settings(width, height, settings),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            error_message: None,
        }
    }

    pub fn session(&self) -> &PaintSession {
        &self.session
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Run a command against the session, reporting failures in the error window
    pub fn execute_command(&mut self, ctx: &egui::Context, command: Command) {
        let language = self.session.language();
        let is_load = matches!(command, Command::LoadFrom(_));

        match self.session.execute(command) {
            Ok(()) if is_load => self.fit_window_to_canvas(ctx),
            Ok(()) => {}
            Err(err) => {
                log::error!("Command failed: {}", err);
                let detail = language.tr(err.label());
                self.error_message = Some(if is_load {
                    language.load_failed(&detail)
                } else {
                    language.save_failed(&detail)
                });
            }
        }
    }

    /// Keep the canvas matched to the on-screen drawing surface
    pub(crate) fn sync_surface(&mut self, rect: egui::Rect) {
        let width = rect.width().max(1.0).floor() as u32;
        let height = rect.height().max(1.0).floor() as u32;
        self.session.resize_surface(width, height);
    }

    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect, canvas_hovered: bool) {
        // Input meant for the error window must not paint underneath it
        let canvas_hovered = canvas_hovered && self.error_message.is_none();
        for event in self.input.process_input(ctx, canvas_rect, canvas_hovered) {
            self.session.handle_input(event);
        }
    }

    pub(crate) fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(ctx, painter, rect, &self.session);
    }

    /// Grow or shrink the window by the difference between the loaded image
    /// and the current drawing surface.
    fn fit_window_to_canvas(&self, ctx: &egui::Context) {
        let Some([surface_width, surface_height]) = self.session.surface() else {
            return;
        };
        let canvas = self.session.canvas();
        let delta = egui::vec2(
            canvas.width() as f32 - surface_width as f32,
            canvas.height() as f32 - surface_height as f32,
        );
        if let Some(inner) = ctx.input(|i| i.viewport().inner_rect) {
            let size = inner.size() + delta;
            log::debug!("Resizing window to {:?} to fit the loaded image", size);
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        }
    }

    fn error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };
        let language = self.session.language();
        let mut dismissed = false;
        egui::Window::new(language.tr(Label::ErrorTitle))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button(language.tr(Label::Dismiss)).clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.error_message = None;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.session.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side and top panels first so the central panel gets the remaining space
        panels::toolbar(self, ctx);
        panels::color_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.error_window(ctx);
    }
}

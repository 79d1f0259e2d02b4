use egui::PointerButton;
use std::path::Path;

use crate::canvas::Canvas;
use crate::command::Command;
use crate::error::PaintResult;
use crate::i18n::Language;
use crate::input::InputEvent;
use crate::palette;
use crate::pen::{Pen, PenSize};
use crate::settings::Settings;
use crate::state::EditorState;
use crate::tools::{Tool, ToolKind, ToolSelection};

/// Everything the paint window shows and edits, without any UI attached
#[derive(Debug)]
pub struct PaintSession {
    canvas: Canvas,
    pen: Pen,
    pen_size: PenSize,
    tools: ToolSelection,
    state: EditorState,
    color_index: Option<usize>,
    language: Language,
    /// Size of the drawing surface as of the last layout pass
    surface: Option<[u32; 2]>,
}

impl PaintSession {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_settings(width, height, Settings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: Settings) -> Self {
        let settings = settings.sanitized();
        let mut session = Self {
            canvas: Canvas::new(width, height),
            pen: Pen::default(),
            pen_size: settings.pen_size,
            tools: ToolSelection::default(),
            state: EditorState::default(),
            color_index: None,
            language: settings.language,
            surface: None,
        };
        session.pen.set_size(settings.pen_size);
        if let Some(index) = settings.color_index {
            session.select_color(index);
        }
        session
    }

    pub fn settings(&self) -> Settings {
        Settings {
            language: self.language,
            pen_size: self.pen_size,
            color_index: self.color_index,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn pen_size(&self) -> PenSize {
        self.pen_size
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn tools(&self) -> &ToolSelection {
        &self.tools
    }

    pub fn active_tool(&self) -> Option<ToolKind> {
        self.tools.active_kind()
    }

    pub fn color_index(&self) -> Option<usize> {
        self.color_index
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn surface(&self) -> Option<[u32; 2]> {
        self.surface
    }

    /// Execute a toolbar or panel action
    pub fn execute(&mut self, command: Command) -> PaintResult<()> {
        log::debug!("Executing {}", command.name());
        match command {
            Command::ToggleTool(kind) => {
                // switching tools abandons the gesture in progress
                self.state = EditorState::Idle;
                let active = self.tools.toggle(kind);
                log::info!("Active tool: {:?}", active);
            }
            Command::SetPenSize(size) => {
                self.pen_size = size;
                self.pen.set_size(size);
            }
            Command::SelectColor(index) => self.select_color(index),
            Command::ClearCanvas => {
                let [width, height] = self
                    .surface
                    .unwrap_or([self.canvas.width(), self.canvas.height()]);
                self.state = EditorState::Idle;
                self.canvas.reset(width, height);
            }
            Command::SetLanguage(language) => {
                log::info!("Language changed to {}", language.code());
                self.language = language;
            }
            Command::SaveTo(path) => self.save_to(&path)?,
            Command::LoadFrom(path) => self.load_from(&path)?,
        }
        Ok(())
    }

    /// Drive the mouse state machine with one pointer event
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos, button } => {
                if self.tools.active().is_none() {
                    return;
                }
                match button {
                    PointerButton::Primary => {
                        log::debug!("Gesture started at {:?}", pos);
                        self.state.begin(pos);
                    }
                    PointerButton::Secondary => self.end_gesture(),
                    _ => {}
                }
            }
            InputEvent::PointerUp { button: PointerButton::Primary, .. } => self.end_gesture(),
            InputEvent::PointerUp { .. } => {}
            InputEvent::PointerMove { pos } => {
                let Some(gesture) = self.state.gesture_mut() else {
                    return;
                };
                if let Some(tool) = self.tools.active_mut() {
                    tool.on_pointer_move(pos, gesture, &mut self.canvas, &self.pen);
                }
            }
        }
    }

    /// Keep the canvas the size of the drawing surface. Only reacts when the
    /// surface actually changes, so a freshly loaded image survives until
    /// the window has been resized around it.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if self.surface == Some([width, height]) {
            return;
        }
        log::debug!("Drawing surface resized to {}x{}", width, height);
        self.surface = Some([width, height]);
        self.canvas.resize(width, height);
    }

    pub fn save_to(&self, path: &Path) -> PaintResult<()> {
        self.canvas.save_bmp(path)?;
        log::info!("Saved canvas to {}", path.display());
        Ok(())
    }

    pub fn load_from(&mut self, path: &Path) -> PaintResult<()> {
        let loaded = Canvas::load(path)?;
        log::info!(
            "Loaded {}x{} image from {}",
            loaded.width(),
            loaded.height(),
            path.display()
        );
        self.state = EditorState::Idle;
        self.canvas.replace(loaded);
        Ok(())
    }

    fn end_gesture(&mut self) {
        let Some(gesture) = self.state.finish() else {
            return;
        };
        if let Some(tool) = self.tools.active_mut() {
            tool.on_pointer_up(&gesture, &mut self.canvas, &self.pen);
        }
    }

    fn select_color(&mut self, index: usize) {
        let Some(entry) = palette::PALETTE.get(index) else {
            log::warn!("No palette entry at index {}", index);
            return;
        };
        self.color_index = Some(index);
        self.pen.set_color(entry.color);
    }
}

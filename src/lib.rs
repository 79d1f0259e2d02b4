#![warn(clippy::all, rust_2018_idioms)]

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod i18n;
pub mod input;
pub mod palette;
pub mod panels;
pub mod pen;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use command::Command;
pub use error::{PaintError, PaintResult};
pub use i18n::{Label, Language};
pub use input::{InputEvent, InputHandler};
pub use pen::{Pen, PenSize};
pub use renderer::Renderer;
pub use session::PaintSession;
pub use settings::Settings;
pub use state::EditorState;
pub use tools::{Tool, ToolKind, ToolType};

use egui::{Color32, TextureHandle, TextureOptions};

use crate::session::PaintSession;
use crate::tools::Tool;

/// Shows the canvas bitmap as a texture plus the live preview of the shape
/// being dragged.
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Canvas version currently held by the texture
    uploaded_version: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            uploaded_version: None,
        }
    }

    /// Canvas version the texture was last uploaded from
    pub fn uploaded_version(&self) -> Option<u64> {
        self.uploaded_version
    }

    /// Upload the canvas if it changed since the last frame
    pub fn sync_texture(&mut self, ctx: &egui::Context, session: &PaintSession) {
        let canvas = session.canvas();
        if canvas.width() == 0 || canvas.height() == 0 {
            return;
        }
        if self.uploaded_version == Some(canvas.version()) && self.texture.is_some() {
            return;
        }

        let image = canvas.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_version = Some(canvas.version());
    }

    /// Renders the canvas into `rect`, anchored at its top-left corner
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect, session: &PaintSession) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);

        self.sync_texture(ctx, session);
        if let Some(texture) = &self.texture {
            let canvas = session.canvas();
            let image_rect = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(canvas.width() as f32, canvas.height() as f32),
            );
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), image_rect, uv, Color32::WHITE);
        }

        let offset = rect.min.to_vec2();
        for mut shape in Self::preview_shapes(session) {
            shape.translate(offset);
            painter.add(shape);
        }
    }

    /// Preview of the in-progress shape, in canvas coordinates
    pub fn preview_shapes(session: &PaintSession) -> Vec<egui::Shape> {
        match (session.state().gesture(), session.tools().active()) {
            (Some(gesture), Some(tool)) => tool.preview(gesture, session.pen()),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::input::InputEvent;
    use crate::tools::ToolKind;
    use egui::{PointerButton, pos2};

    #[test]
    fn test_texture_reuploads_only_on_change() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::new();
        let mut session = PaintSession::new(32, 32);

        renderer.sync_texture(&ctx, &session);
        let first = renderer.uploaded_version();
        assert!(first.is_some());

        renderer.sync_texture(&ctx, &session);
        assert_eq!(renderer.uploaded_version(), first);

        session.execute(Command::ClearCanvas).unwrap();
        renderer.sync_texture(&ctx, &session);
        assert_ne!(renderer.uploaded_version(), first);
    }

    #[test]
    fn test_preview_only_while_dragging_a_shape() {
        let mut session = PaintSession::new(64, 64);
        session.execute(Command::ToggleTool(ToolKind::Ellipse)).unwrap();
        assert!(Renderer::preview_shapes(&session).is_empty());

        session.handle_input(InputEvent::PointerDown { pos: pos2(5.0, 5.0), button: PointerButton::Primary });
        session.handle_input(InputEvent::PointerMove { pos: pos2(40.0, 30.0) });
        assert_eq!(Renderer::preview_shapes(&session).len(), 1);

        session.handle_input(InputEvent::PointerUp { pos: pos2(40.0, 30.0), button: PointerButton::Primary });
        assert!(Renderer::preview_shapes(&session).is_empty());
    }

    #[test]
    fn test_render_basics() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::new();
        let session = PaintSession::new(100, 100);
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        renderer.render(&ctx, &painter, rect, &session);
        assert!(renderer.uploaded_version().is_some());
    }
}

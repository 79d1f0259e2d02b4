use egui::{Pos2, Rect, Shape};

use crate::canvas::Canvas;
use crate::geometry;
use crate::pen::Pen;
use crate::state::Gesture;
use crate::tools::{Tool, ToolKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// Rubber-band shape: the outline follows the pointer as a preview and is
/// only rasterised into the canvas when the gesture ends.
#[derive(Debug, Clone)]
pub struct ShapeTool {
    shape: ShapeKind,
}

impl ShapeTool {
    pub fn new(shape: ShapeKind) -> Self {
        Self { shape }
    }

    fn outline(&self, rect: Rect) -> Vec<Pos2> {
        match self.shape {
            ShapeKind::Rectangle => vec![
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
            ],
            ShapeKind::Ellipse => geometry::ellipse_outline(rect),
        }
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.shape {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
        }
    }

    fn kind(&self) -> ToolKind {
        match self.shape {
            ShapeKind::Rectangle => ToolKind::Rectangle,
            ShapeKind::Ellipse => ToolKind::Ellipse,
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, gesture: &mut Gesture, _canvas: &mut Canvas, _pen: &Pen) {
        gesture.track(pos);
    }

    fn on_pointer_up(&mut self, gesture: &Gesture, canvas: &mut Canvas, pen: &Pen) {
        if geometry::is_degenerate(gesture.rect) {
            log::debug!("Skipping empty {}", self.name());
            return;
        }
        log::debug!("Committing {} {:?}", self.name(), gesture.rect);
        match self.shape {
            ShapeKind::Rectangle => canvas.draw_rect(gesture.rect, pen),
            ShapeKind::Ellipse => canvas.draw_ellipse(gesture.rect, pen),
        }
    }

    fn preview(&self, gesture: &Gesture, pen: &Pen) -> Vec<Shape> {
        if geometry::is_degenerate(gesture.rect) {
            return Vec::new();
        }
        vec![Shape::closed_line(self.outline(gesture.rect), pen.to_egui_stroke())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_preview_follows_pointer() {
        let mut tool = ShapeTool::new(ShapeKind::Rectangle);
        let mut canvas = Canvas::new(50, 50);
        let pen = Pen::default();
        let mut gesture = Gesture::new(pos2(10.0, 10.0));
        assert!(tool.preview(&gesture, &pen).is_empty());

        tool.on_pointer_move(pos2(30.0, 5.0), &mut gesture, &mut canvas, &pen);
        assert_eq!(gesture.rect, Rect::from_min_max(pos2(10.0, 5.0), pos2(30.0, 10.0)));
        assert_eq!(tool.preview(&gesture, &pen).len(), 1);
        assert_eq!(canvas.version(), 0);
    }
}

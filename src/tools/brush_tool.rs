use egui::Pos2;

use crate::canvas::Canvas;
use crate::pen::Pen;
use crate::state::Gesture;
use crate::tools::{Tool, ToolKind};

/// Freehand drawing: every pointer move paints a segment straight into the canvas
#[derive(Debug, Clone, Default)]
pub struct BrushTool {
    segments: usize,
}

impl BrushTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for BrushTool {
    fn name(&self) -> &'static str {
        "Brush"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Brush
    }

    fn on_pointer_move(&mut self, pos: Pos2, gesture: &mut Gesture, canvas: &mut Canvas, pen: &Pen) {
        gesture.track(pos);
        canvas.draw_line(gesture.last, pos, pen);
        gesture.last = pos;
        self.segments += 1;
    }

    fn on_pointer_up(&mut self, _gesture: &Gesture, _canvas: &mut Canvas, _pen: &Pen) {
        // Everything is already on the canvas
        log::debug!("Brush stroke finished after {} segments", self.segments);
        self.segments = 0;
    }
}

use egui::{Pos2, Shape};

use crate::canvas::Canvas;
use crate::i18n::Label;
use crate::pen::Pen;
use crate::state::Gesture;

/// The drawing tools offered on the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Brush,
    Rectangle,
    Ellipse,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Brush, ToolKind::Rectangle, ToolKind::Ellipse];

    pub fn label(self) -> Label {
        match self {
            ToolKind::Brush => Label::Brush,
            ToolKind::Rectangle => Label::Rectangle,
            ToolKind::Ellipse => Label::Ellipse,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Brush => "🖌",
            ToolKind::Rectangle => "⬜",
            ToolKind::Ellipse => "⭕",
        }
    }
}

/// Tool trait defines how a drawing tool reacts to one gesture
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    fn kind(&self) -> ToolKind;

    /// Handle pointer drag while the left button is held
    fn on_pointer_move(&mut self, pos: Pos2, gesture: &mut Gesture, canvas: &mut Canvas, pen: &Pen);

    /// Finish the gesture, committing whatever it produced onto the canvas
    fn on_pointer_up(&mut self, gesture: &Gesture, canvas: &mut Canvas, pen: &Pen);

    /// Shapes painted on top of the canvas while the gesture is in progress,
    /// in canvas coordinates
    fn preview(&self, _gesture: &Gesture, _pen: &Pen) -> Vec<Shape> {
        Vec::new()
    }
}

mod brush_tool;
pub use brush_tool::BrushTool;

mod shape_tool;
pub use shape_tool::{ShapeKind, ShapeTool};

/// Enum representing all available tool types.
/// This allows us to avoid using Box<dyn Tool>.
#[derive(Debug, Clone)]
pub enum ToolType {
    Brush(BrushTool),
    Shape(ShapeTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Brush => Self::Brush(BrushTool::new()),
            ToolKind::Rectangle => Self::Shape(ShapeTool::new(ShapeKind::Rectangle)),
            ToolKind::Ellipse => Self::Shape(ShapeTool::new(ShapeKind::Ellipse)),
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Brush(tool) => tool.name(),
            Self::Shape(tool) => tool.name(),
        }
    }

    fn kind(&self) -> ToolKind {
        match self {
            Self::Brush(tool) => tool.kind(),
            Self::Shape(tool) => tool.kind(),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, gesture: &mut Gesture, canvas: &mut Canvas, pen: &Pen) {
        match self {
            Self::Brush(tool) => tool.on_pointer_move(pos, gesture, canvas, pen),
            Self::Shape(tool) => tool.on_pointer_move(pos, gesture, canvas, pen),
        }
    }

    fn on_pointer_up(&mut self, gesture: &Gesture, canvas: &mut Canvas, pen: &Pen) {
        match self {
            Self::Brush(tool) => tool.on_pointer_up(gesture, canvas, pen),
            Self::Shape(tool) => tool.on_pointer_up(gesture, canvas, pen),
        }
    }

    fn preview(&self, gesture: &Gesture, pen: &Pen) -> Vec<Shape> {
        match self {
            Self::Brush(tool) => tool.preview(gesture, pen),
            Self::Shape(tool) => tool.preview(gesture, pen),
        }
    }
}

/// Toolbar toggle semantics: at most one tool is active, and clicking the
/// active tool switches it off.
#[derive(Debug, Clone, Default)]
pub struct ToolSelection {
    active: Option<ToolType>,
}

impl ToolSelection {
    /// Toggle `kind` and return the tool that is active afterwards
    pub fn toggle(&mut self, kind: ToolKind) -> Option<ToolKind> {
        if self.active_kind() == Some(kind) {
            self.active = None;
        } else {
            self.active = Some(ToolType::new(kind));
        }
        self.active_kind()
    }

    pub fn active_kind(&self) -> Option<ToolKind> {
        self.active.as_ref().map(|tool| tool.kind())
    }

    pub fn is_active(&self, kind: ToolKind) -> bool {
        self.active_kind() == Some(kind)
    }

    pub fn active(&self) -> Option<&ToolType> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ToolType> {
        self.active.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_activates_exclusively() {
        let mut selection = ToolSelection::default();
        assert_eq!(selection.active_kind(), None);

        assert_eq!(selection.toggle(ToolKind::Brush), Some(ToolKind::Brush));
        assert!(selection.is_active(ToolKind::Brush));
        assert!(!selection.is_active(ToolKind::Rectangle));

        assert_eq!(selection.toggle(ToolKind::Ellipse), Some(ToolKind::Ellipse));
        assert!(!selection.is_active(ToolKind::Brush));
        assert!(selection.is_active(ToolKind::Ellipse));
    }

    #[test]
    fn test_toggle_twice_deactivates() {
        let mut selection = ToolSelection::default();
        selection.toggle(ToolKind::Rectangle);
        assert_eq!(selection.toggle(ToolKind::Rectangle), None);
        assert!(selection.active().is_none());
    }

    #[test]
    fn test_tool_type_names() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolType::new(kind).kind(), kind);
        }
        assert_eq!(ToolType::new(ToolKind::Brush).name(), "Brush");
        assert_eq!(ToolType::new(ToolKind::Ellipse).name(), "Ellipse");
    }
}

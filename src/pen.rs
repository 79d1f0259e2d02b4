use egui::Color32;
use serde::{Deserialize, Serialize};

/// Stroke width presets offered by the size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PenSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PenSize {
    pub const ALL: [PenSize; 3] = [PenSize::Small, PenSize::Medium, PenSize::Large];

    /// Stroke width in pixels
    pub fn width(self) -> f32 {
        match self {
            PenSize::Small => 1.0,
            PenSize::Medium => 3.0,
            PenSize::Large => 6.0,
        }
    }

    /// Position in the size selector
    pub fn index(self) -> usize {
        match self {
            PenSize::Small => 0,
            PenSize::Medium => 1,
            PenSize::Large => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Color and width used for everything drawn onto the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    color: Color32,
    width: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color32::BLACK, PenSize::default().width())
    }
}

impl Pen {
    pub fn new(color: Color32, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_size(&mut self, size: PenSize) {
        self.width = size.width();
    }

    /// The pen as an egui stroke, for previews painted on screen
    pub fn to_egui_stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.width, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_presets() {
        assert_eq!(PenSize::from_index(0).map(PenSize::width), Some(1.0));
        assert_eq!(PenSize::from_index(1).map(PenSize::width), Some(3.0));
        assert_eq!(PenSize::from_index(2).map(PenSize::width), Some(6.0));
        assert_eq!(PenSize::from_index(3), None);
        for size in PenSize::ALL {
            assert_eq!(PenSize::from_index(size.index()), Some(size));
        }
    }

    #[test]
    fn test_default_pen() {
        let pen = Pen::default();
        assert_eq!(pen.color(), Color32::BLACK);
        assert_eq!(pen.width(), 3.0);
    }
}

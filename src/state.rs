use egui::{Pos2, Rect};

use crate::geometry;

/// Data tracked between mouse-down and mouse-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    /// Where the button went down
    pub anchor: Pos2,
    /// Previous brush position
    pub last: Pos2,
    /// Latest pointer position
    pub current: Pos2,
    /// Normalised bounding rectangle of `anchor` and `current`
    pub rect: Rect,
}

impl Gesture {
    pub fn new(anchor: Pos2) -> Self {
        Self {
            anchor,
            last: anchor,
            current: anchor,
            rect: geometry::drag_rect(anchor, anchor),
        }
    }

    /// Record a new pointer position and recompute the bounding rectangle
    pub fn track(&mut self, pos: Pos2) {
        self.current = pos;
        self.rect = geometry::drag_rect(self.anchor, pos);
    }
}

/// The mouse state machine: idle → drawing → committed (idle again)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing(Gesture),
}

impl EditorState {
    pub fn begin(&mut self, anchor: Pos2) {
        *self = Self::Drawing(Gesture::new(anchor));
    }

    /// Leave the drawing state, handing back the gesture if there was one
    pub fn finish(&mut self) -> Option<Gesture> {
        match std::mem::take(self) {
            Self::Drawing(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            Self::Drawing(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    pub fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        match self {
            Self::Drawing(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_begin_and_finish() {
        let mut state = EditorState::default();
        assert!(!state.is_drawing());
        assert_eq!(state.finish(), None);

        state.begin(pos2(3.0, 4.0));
        assert!(state.is_drawing());
        let gesture = state.finish().unwrap();
        assert_eq!(gesture.anchor, pos2(3.0, 4.0));
        assert_eq!(state, EditorState::Idle);
    }

    #[test]
    fn test_track_updates_rect() {
        let mut gesture = Gesture::new(pos2(10.0, 10.0));
        assert!(geometry::is_degenerate(gesture.rect));
        gesture.track(pos2(4.0, 16.0));
        assert_eq!(gesture.rect, Rect::from_min_max(pos2(4.0, 10.0), pos2(10.0, 16.0)));
        assert_eq!(gesture.last, pos2(10.0, 10.0));
    }
}

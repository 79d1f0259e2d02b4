use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over the canvas
    PointerDown { pos: Pos2, button: PointerButton },
    /// Mouse button was released, anywhere
    PointerUp { pos: Pos2, button: PointerButton },
    /// Mouse moved, anywhere
    PointerMove { pos: Pos2 },
}

/// Handles converting raw egui input into our domain-specific InputEvents.
///
/// Presses only count when they start on the canvas; moves and releases are
/// forwarded wherever they happen, so a drag keeps tracking after the pointer
/// leaves the drawing surface.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// `canvas_rect` is where the canvas is shown on screen; `canvas_hovered`
    /// is false when another layer (e.g. a window) covers the pointer.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect, canvas_hovered: bool) -> Vec<InputEvent> {
        let raw: Vec<egui::Event> = ctx.input(|input| input.events.clone());
        self.translate(&raw, canvas_rect, canvas_hovered)
    }

    /// Translate raw egui events; split out so it can run without a window
    pub fn translate(&mut self, raw: &[egui::Event], canvas_rect: Rect, canvas_hovered: bool) -> Vec<InputEvent> {
        let to_canvas = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
        let mut events = Vec::new();

        for event in raw {
            match event {
                egui::Event::PointerMoved(pos) => {
                    if self.last_pointer_pos != Some(*pos) {
                        events.push(InputEvent::PointerMove { pos: to_canvas(*pos) });
                    }
                    self.last_pointer_pos = Some(*pos);
                }
                egui::Event::PointerButton { pos, button, pressed: true, .. } => {
                    if canvas_hovered && canvas_rect.contains(*pos) {
                        events.push(InputEvent::PointerDown {
                            pos: to_canvas(*pos),
                            button: *button,
                        });
                    }
                }
                egui::Event::PointerButton { pos, button, pressed: false, .. } => {
                    events.push(InputEvent::PointerUp {
                        pos: to_canvas(*pos),
                        button: *button,
                    });
                }
                egui::Event::PointerGone => {
                    self.last_pointer_pos = None;
                }
                _ => {}
            }
        }

        events
    }
}

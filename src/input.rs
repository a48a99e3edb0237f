use egui::{Context, Pos2, Rect};

use crate::shape::Point;

/// Pointer events in canvas-local coordinates for the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Button went down over the canvas
    PointerDown(Point),
    /// Pointer moved while the button is held
    PointerMove(Point),
    /// Button was released, possibly outside the canvas
    PointerUp(Point),
}

/// Snapshot of the primary pointer for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| {
            let pointer = &input.pointer;
            Self {
                pos: pointer.interact_pos().or_else(|| pointer.latest_pos()),
                pressed: pointer.primary_pressed(),
                down: pointer.primary_down(),
                released: pointer.primary_released(),
            }
        })
    }
}

/// Turns raw egui pointer state into canvas `InputEvent`s.
///
/// A gesture only starts when the button goes down inside the canvas; once
/// started, moves and the release are reported wherever the pointer is.
#[derive(Debug, Default)]
pub struct InputHandler {
    tracking: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Process this frame's egui input for a canvas occupying `canvas_rect`.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        self.process_sample(PointerSample::from_egui(ctx), canvas_rect)
    }

    pub fn process_sample(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let origin = canvas_rect.min;

        if sample.pressed {
            if let Some(pos) = sample.pos.filter(|pos| canvas_rect.contains(*pos)) {
                self.tracking = true;
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::PointerDown(Point::from_screen(pos, origin)));
            }
        }

        if !self.tracking {
            return events;
        }

        if sample.down {
            if let Some(pos) = sample.pos {
                if Some(pos) != self.last_pointer_pos {
                    log::trace!("Pointer moved to {pos:?}");
                    events.push(InputEvent::PointerMove(Point::from_screen(pos, origin)));
                    self.last_pointer_pos = Some(pos);
                }
            }
        }

        if sample.released {
            if let Some(pos) = sample.pos.or(self.last_pointer_pos) {
                events.push(InputEvent::PointerUp(Point::from_screen(pos, origin)));
            }
            self.tracking = false;
            self.last_pointer_pos = None;
        }

        events
    }
}

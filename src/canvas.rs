use egui::Color32;

use crate::document::Document;
use crate::gesture::Gesture;
use crate::input::InputEvent;
use crate::renderer::{LivePath, Renderer};
use crate::shape::{Bounds, Point, Shape, ShapeStyle};
use crate::state::{DrawingState, ToolKind};
use crate::surface::Surface;

/// The drawing surface model: committed shapes plus the gesture in progress.
///
/// Every handler returns `true` when the canvas needs repainting.
#[derive(Debug, Clone)]
pub struct Canvas {
    document: Document,
    live_path: Vec<Point>,
    gesture: Gesture,
    background: Color32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl Canvas {
    pub fn new(background: Color32) -> Self {
        Self {
            document: Document::new(),
            live_path: Vec::new(),
            gesture: Gesture::Idle,
            background,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    /// The uncommitted freehand path of the current gesture.
    pub fn live_path(&self) -> &[Point] {
        &self.live_path
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// The live path styled from the current toolbar settings, if one is being drawn.
    pub fn live_preview(&self, state: &DrawingState) -> Option<LivePath<'_>> {
        if self.live_path.is_empty() {
            return None;
        }
        Some(LivePath {
            points: &self.live_path,
            color: state.stroke_color(self.background),
            dotted: state.dotted,
            eraser: state.eraser,
        })
    }

    /// Paints committed shapes followed by the live path.
    pub fn render<S: Surface + ?Sized>(&self, renderer: &Renderer, surface: &mut S, state: &DrawingState) {
        renderer.render(surface, self.document.iter(), self.live_preview(state));
    }

    pub fn handle_input(&mut self, event: InputEvent, state: &DrawingState) -> bool {
        match event {
            InputEvent::PointerDown(point) => self.on_press_start(point, state),
            InputEvent::PointerMove(point) => self.on_drag(point, state),
            InputEvent::PointerUp(point) => self.on_release_commit(point, state),
        }
    }

    pub fn on_press_start(&mut self, point: Point, state: &DrawingState) -> bool {
        self.gesture.press(point);
        if state.tool.is_freehand() {
            self.live_path.clear();
            self.live_path.push(point);
            return true;
        }
        false
    }

    pub fn on_drag(&mut self, point: Point, state: &DrawingState) -> bool {
        if !self.gesture.is_drawing() || !state.tool.is_freehand() {
            return false;
        }
        self.live_path.push(point);
        true
    }

    pub fn on_release_commit(&mut self, point: Point, state: &DrawingState) -> bool {
        let Some(start) = self.gesture.release() else {
            log::debug!("Release without a press at {point:?}");
            return false;
        };

        let style = ShapeStyle { color: state.color, dotted: state.dotted };
        let shape = match state.tool {
            ToolKind::Line => Shape::Line { style, start, end: point },
            ToolKind::Rectangle => Shape::Rectangle {
                style,
                bounds: Bounds::from_corners(start, point),
                filled: state.filled,
            },
            ToolKind::Oval => Shape::Oval {
                style,
                bounds: Bounds::from_corners(start, point),
                filled: state.filled,
            },
            ToolKind::Pencil => Shape::Freehand {
                style: ShapeStyle { color: state.stroke_color(self.background), ..style },
                path: std::mem::take(&mut self.live_path),
                eraser: state.eraser,
            },
        };
        self.live_path.clear();

        self.document.push(shape);
        true
    }

    pub fn undo(&mut self) -> bool {
        self.document.undo().is_some()
    }

    pub fn clear(&mut self) -> bool {
        self.document.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_ignored_for_shape_tools() {
        let mut canvas = Canvas::default();
        let state = DrawingState::new();
        assert!(!canvas.on_press_start(Point::new(0, 0), &state));
        assert!(!canvas.on_drag(Point::new(5, 5), &state));
        assert!(canvas.live_path().is_empty());
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut canvas = Canvas::default();
        let mut state = DrawingState::new();
        state.set_tool(ToolKind::Pencil);
        assert!(!canvas.on_drag(Point::new(5, 5), &state));
        assert!(canvas.live_path().is_empty());
    }

    #[test]
    fn test_release_clears_live_path() {
        let mut canvas = Canvas::default();
        let mut state = DrawingState::new();
        state.set_tool(ToolKind::Pencil);
        canvas.on_press_start(Point::new(1, 1), &state);
        canvas.on_drag(Point::new(2, 2), &state);
        assert_eq!(canvas.live_path().len(), 2);

        canvas.on_release_commit(Point::new(2, 2), &state);
        assert!(canvas.live_path().is_empty());
        assert_eq!(canvas.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_new_press_resets_live_path() {
        let mut canvas = Canvas::default();
        let mut state = DrawingState::new();
        state.set_tool(ToolKind::Pencil);
        canvas.on_press_start(Point::new(1, 1), &state);
        canvas.on_drag(Point::new(2, 2), &state);
        canvas.on_press_start(Point::new(9, 9), &state);
        assert_eq!(canvas.live_path(), &[Point::new(9, 9)]);
    }
}

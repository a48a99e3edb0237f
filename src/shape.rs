use egui::Color32;

/// A canvas position in whole pixels, relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a screen position into canvas space, rounding to the nearest pixel.
    pub fn from_screen(pos: egui::Pos2, canvas_origin: egui::Pos2) -> Self {
        let local = pos - canvas_origin;
        Self::new(local.x.round() as i32, local.y.round() as i32)
    }

    pub fn to_screen(self, canvas_origin: egui::Pos2) -> egui::Pos2 {
        canvas_origin + egui::vec2(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned box with a top-left origin.
///
/// Width and height are unsigned so a box can never be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// Normalises two opposite corners of a drag into a box.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            origin: Point::new(a.x.min(b.x), a.y.min(b.y)),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Attributes every shape carries regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub color: Color32,
    pub dotted: bool,
}

/// A committed drawing primitive.
///
/// Shapes are never edited after they enter the document; they only leave it
/// through undo or clear.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        style: ShapeStyle,
        start: Point,
        end: Point,
    },
    Rectangle {
        style: ShapeStyle,
        bounds: Bounds,
        filled: bool,
    },
    Oval {
        style: ShapeStyle,
        bounds: Bounds,
        filled: bool,
    },
    Freehand {
        style: ShapeStyle,
        path: Vec<Point>,
        /// Painted over earlier shapes in the background colour with a wide stroke.
        eraser: bool,
    },
}

impl Shape {
    pub fn style(&self) -> ShapeStyle {
        match self {
            Self::Line { style, .. }
            | Self::Rectangle { style, .. }
            | Self::Oval { style, .. }
            | Self::Freehand { style, .. } => *style,
        }
    }

    pub fn color(&self) -> Color32 {
        self.style().color
    }

    pub fn is_dotted(&self) -> bool {
        self.style().dotted
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, Self::Freehand { eraser: true, .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Oval { .. } => "oval",
            Self::Freehand { eraser: true, .. } => "eraser",
            Self::Freehand { .. } => "freehand",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_reversed_corners() {
        let bounds = Bounds::from_corners(Point::new(50, 30), Point::new(10, 10));
        assert_eq!(bounds.origin, Point::new(10, 10));
        assert_eq!(bounds.width, 40);
        assert_eq!(bounds.height, 20);
    }

    #[test]
    fn test_bounds_degenerate() {
        let bounds = Bounds::from_corners(Point::new(7, -3), Point::new(7, -3));
        assert_eq!(bounds.origin, Point::new(7, -3));
        assert!(bounds.is_empty());
    }

    #[test]
    fn test_bounds_extreme_coordinates() {
        let bounds = Bounds::from_corners(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
        assert_eq!(bounds.width, u32::MAX);
        assert_eq!(bounds.height, 0);
    }

    #[test]
    fn test_point_screen_conversion() {
        let origin = egui::pos2(100.0, 40.0);
        let point = Point::from_screen(egui::pos2(110.4, 59.6), origin);
        assert_eq!(point, Point::new(10, 20));
        assert_eq!(point.to_screen(origin), egui::pos2(110.0, 60.0));
    }

    #[test]
    fn test_eraser_flag_only_on_freehand() {
        let style = ShapeStyle { color: Color32::WHITE, dotted: false };
        let eraser = Shape::Freehand { style, path: vec![Point::new(0, 0)], eraser: true };
        let line = Shape::Line { style, start: Point::new(0, 0), end: Point::new(1, 1) };
        assert!(eraser.is_eraser());
        assert!(!line.is_eraser());
        assert_eq!(eraser.kind_name(), "eraser");
    }
}

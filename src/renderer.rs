use egui::Color32;

use crate::config::PaintConfig;
use crate::shape::{Point, Shape};
use crate::surface::{StrokeStyle, Surface};

/// Uncommitted freehand path, drawn with the current toolbar settings.
#[derive(Debug, Clone, Copy)]
pub struct LivePath<'a> {
    pub points: &'a [Point],
    pub color: Color32,
    pub dotted: bool,
    pub eraser: bool,
}

/// Issues draw calls for a list of shapes against any `Surface`.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    eraser_width: f32,
    dash_length: f32,
    dash_gap: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&PaintConfig::default())
    }
}

impl Renderer {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            eraser_width: config.eraser_width,
            dash_length: config.dash_length,
            dash_gap: config.dash_gap,
        }
    }

    /// Dotted wins over the eraser stroke; everything else is a thin solid line.
    pub fn stroke_for(&self, dotted: bool, eraser: bool) -> StrokeStyle {
        if dotted {
            StrokeStyle::dashed(self.dash_length, self.dash_gap)
        } else if eraser {
            StrokeStyle::eraser(self.eraser_width)
        } else {
            StrokeStyle::solid()
        }
    }

    /// Draws `shapes` in order, then the live path on top if there is one.
    pub fn render<'a, S, I>(&self, surface: &mut S, shapes: I, live: Option<LivePath<'_>>)
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = &'a Shape>,
    {
        for shape in shapes {
            surface.set_stroke_color(shape.color());
            surface.set_stroke_style(self.stroke_for(shape.is_dotted(), shape.is_eraser()));
            draw_shape(surface, shape);
        }

        if let Some(live) = live.filter(|live| !live.points.is_empty()) {
            surface.set_stroke_color(live.color);
            surface.set_stroke_style(self.stroke_for(live.dotted, live.eraser));
            draw_polyline(surface, live.points);
        }
    }
}

fn draw_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    match shape {
        Shape::Line { start, end, .. } => surface.draw_line(*start, *end),
        Shape::Rectangle { bounds, filled: true, .. } => surface.fill_rect(*bounds),
        Shape::Rectangle { bounds, filled: false, .. } => surface.draw_rect(*bounds),
        Shape::Oval { bounds, filled: true, .. } => surface.fill_oval(*bounds),
        Shape::Oval { bounds, filled: false, .. } => surface.draw_oval(*bounds),
        Shape::Freehand { path, .. } => draw_polyline(surface, path),
    }
}

/// One segment per consecutive pair; a single point draws nothing.
fn draw_polyline<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) {
    for pair in points.windows(2) {
        surface.draw_line(pair[0], pair[1]);
    }
}

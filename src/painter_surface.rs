use egui::{Color32, Painter, Pos2, Rect, Shape as EguiShape, Stroke};

use crate::geometry::{ellipse_points, rect_outline};
use crate::shape::{Bounds, Point};
use crate::surface::{LineCap, LineJoin, StrokeStyle, Surface};

/// `Surface` backed by an egui `Painter`, with canvas coordinates offset by the
/// canvas' screen position.
pub struct PainterSurface<'p> {
    painter: &'p Painter,
    origin: Pos2,
    color: Color32,
    style: StrokeStyle,
    oval_segments: usize,
}

impl<'p> PainterSurface<'p> {
    pub fn new(painter: &'p Painter, canvas_rect: Rect, oval_segments: usize) -> Self {
        Self {
            painter,
            origin: canvas_rect.min,
            color: Color32::BLACK,
            style: StrokeStyle::solid(),
            oval_segments,
        }
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.style.width, self.color)
    }

    fn screen_rect(&self, bounds: Bounds) -> Rect {
        Rect::from_min_size(
            bounds.origin.to_screen(self.origin),
            egui::vec2(bounds.width as f32, bounds.height as f32),
        )
    }

    /// Strokes a polyline honouring the dash pattern and round caps/joins.
    fn stroke_path(&self, points: &[Pos2]) {
        if points.len() < 2 {
            return;
        }
        let stroke = self.stroke();

        if let Some(dash) = self.style.dash {
            self.painter.extend(EguiShape::dashed_line(points, stroke, dash.dash, dash.gap));
            return;
        }

        self.painter.add(EguiShape::line(points.to_vec(), stroke));

        // egui strokes are butt-ended; discs at the vertices give round caps and joins.
        let round = self.style.cap == LineCap::Round || self.style.join == LineJoin::Round;
        if round && self.style.width > 1.0 {
            let radius = self.style.width / 2.0;
            for p in points {
                self.painter.circle_filled(*p, radius, self.color);
            }
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn set_stroke_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.stroke_path(&[from.to_screen(self.origin), to.to_screen(self.origin)]);
    }

    fn draw_rect(&mut self, bounds: Bounds) {
        let rect = self.screen_rect(bounds);
        self.stroke_path(&rect_outline(rect));
    }

    fn fill_rect(&mut self, bounds: Bounds) {
        self.painter.rect_filled(self.screen_rect(bounds), 0.0, self.color);
    }

    fn draw_oval(&mut self, bounds: Bounds) {
        let mut outline = ellipse_points(self.screen_rect(bounds), self.oval_segments);
        if let Some(first) = outline.first().copied() {
            outline.push(first);
        }
        self.stroke_path(&outline);
    }

    fn fill_oval(&mut self, bounds: Bounds) {
        if bounds.is_empty() {
            return;
        }
        let outline = ellipse_points(self.screen_rect(bounds), self.oval_segments);
        self.painter.add(EguiShape::convex_polygon(outline, self.color, Stroke::NONE));
    }
}

#![allow(dead_code)]

use egui::Color32;
use paint_brush::{Bounds, Point, StrokeStyle, Surface};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Color(Color32),
    Style(StrokeStyle),
    Line(Point, Point),
    Rect(Bounds),
    FillRect(Bounds),
    Oval(Bounds),
    FillOval(Bounds),
}

/// Surface that remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn geometry(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, DrawCall::Color(_) | DrawCall::Style(_)))
            .collect()
    }

    pub fn styles(&self) -> Vec<StrokeStyle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Style(style) => Some(*style),
                _ => None,
            })
            .collect()
    }

    pub fn colors(&self) -> Vec<Color32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Color(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_stroke_color(&mut self, color: Color32) {
        self.calls.push(DrawCall::Color(color));
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.calls.push(DrawCall::Style(style));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.calls.push(DrawCall::Line(from, to));
    }

    fn draw_rect(&mut self, bounds: Bounds) {
        self.calls.push(DrawCall::Rect(bounds));
    }

    fn fill_rect(&mut self, bounds: Bounds) {
        self.calls.push(DrawCall::FillRect(bounds));
    }

    fn draw_oval(&mut self, bounds: Bounds) {
        self.calls.push(DrawCall::Oval(bounds));
    }

    fn fill_oval(&mut self, bounds: Bounds) {
        self.calls.push(DrawCall::FillOval(bounds));
    }
}

/// Tiny pixel grid for checking what ends up visible. Strokes are one pixel wide.
pub struct RasterSurface {
    width: i32,
    height: i32,
    pixels: Vec<Color32>,
    color: Color32,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32, background: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
            color: Color32::BLACK,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Color32 {
        self.pixels[(y * self.width + x) as usize]
    }

    fn plot(&mut self, x: i32, y: i32) {
        if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
            self.pixels[(y * self.width + x) as usize] = self.color;
        }
    }

    fn fill_cells(&mut self, bounds: Bounds, inside: impl Fn(f32, f32) -> bool) {
        for dy in 0..bounds.height as i32 {
            for dx in 0..bounds.width as i32 {
                if inside(dx as f32 + 0.5, dy as f32 + 0.5) {
                    self.plot(bounds.origin.x + dx, bounds.origin.y + dy);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn set_stroke_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn set_stroke_style(&mut self, _style: StrokeStyle) {}

    fn draw_line(&mut self, from: Point, to: Point) {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_rect(&mut self, bounds: Bounds) {
        let Bounds { origin, width, height } = bounds;
        let (w, h) = (width as i32, height as i32);
        let corners = [
            origin,
            Point::new(origin.x + w, origin.y),
            Point::new(origin.x + w, origin.y + h),
            Point::new(origin.x, origin.y + h),
        ];
        for i in 0..4 {
            self.draw_line(corners[i], corners[(i + 1) % 4]);
        }
    }

    fn fill_rect(&mut self, bounds: Bounds) {
        self.fill_cells(bounds, |_, _| true);
    }

    fn draw_oval(&mut self, bounds: Bounds) {
        self.fill_oval(bounds);
    }

    fn fill_oval(&mut self, bounds: Bounds) {
        let rx = bounds.width as f32 / 2.0;
        let ry = bounds.height as f32 / 2.0;
        self.fill_cells(bounds, |x, y| {
            let nx = (x - rx) / rx;
            let ny = (y - ry) / ry;
            nx * nx + ny * ny <= 1.0
        });
    }
}

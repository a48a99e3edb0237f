use egui::Color32;

use crate::shape::{Bounds, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    Round,
    #[default]
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Alternating painted/skipped lengths along a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f32,
    pub gap: f32,
}

/// How outlines are stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub dash: Option<DashPattern>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid()
    }
}

impl StrokeStyle {
    /// One pixel, no dashes.
    pub fn solid() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Square,
            join: LineJoin::Miter,
            dash: None,
        }
    }

    pub fn dashed(dash: f32, gap: f32) -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Bevel,
            dash: Some(DashPattern { dash, gap }),
        }
    }

    /// Wide, fully rounded stroke used by the eraser.
    pub fn eraser(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
            dash: None,
        }
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

/// Drawing primitives the renderer issues.
///
/// Stroke colour and style are sticky: they apply to every outline drawn until
/// changed. Fills use the stroke colour and ignore the style.
pub trait Surface {
    fn set_stroke_color(&mut self, color: Color32);

    fn set_stroke_style(&mut self, style: StrokeStyle);

    fn draw_line(&mut self, from: Point, to: Point);

    fn draw_rect(&mut self, bounds: Bounds);

    fn fill_rect(&mut self, bounds: Bounds);

    fn draw_oval(&mut self, bounds: Bounds);

    fn fill_oval(&mut self, bounds: Bounds);
}

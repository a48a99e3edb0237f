use egui::Color32;

/// Colours offered by the toolbar swatches, left to right.
pub const PALETTE: [Color32; 4] = [
    Color32::BLACK,
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
];

/// Session-wide constants for the window and the canvas.
///
/// Nothing here is read from disk or the environment; `Default` is the only
/// source of values.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
    pub title: String,
    pub window_size: [f32; 2],
    /// Canvas fill; also the colour eraser strokes are committed with.
    pub background: Color32,
    pub eraser_width: f32,
    /// Length of each painted dash for dotted strokes.
    pub dash_length: f32,
    /// Length of each gap between dashes for dotted strokes.
    pub dash_gap: f32,
    /// Number of polygon vertices used to approximate an oval outline.
    pub oval_segments: usize,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: "Paint Brush".to_owned(),
            window_size: [800.0, 600.0],
            background: Color32::WHITE,
            eraser_width: 20.0,
            dash_length: 9.0,
            dash_gap: 9.0,
            oval_segments: 64,
        }
    }
}

impl PaintConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size),
            centered: true,
            ..Default::default()
        }
    }
}

use egui::Color32;

/// Kind of shape the next gesture will produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Oval,
    /// Freehand path; doubles as the eraser when `DrawingState::eraser` is set.
    Pencil,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [Self::Line, Self::Rectangle, Self::Oval, Self::Pencil];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
            Self::Pencil => "Pencil",
        }
    }

    pub fn is_freehand(&self) -> bool {
        matches!(self, Self::Pencil)
    }
}

/// Current toolbar selections.
///
/// Every setter is a plain assignment; there is no invalid combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingState {
    pub color: Color32,
    pub tool: ToolKind,
    pub dotted: bool,
    pub filled: bool,
    pub eraser: bool,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            tool: ToolKind::default(),
            dotted: false,
            filled: false,
            eraser: false,
        }
    }
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a shape tool and leaves eraser mode.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::info!("Tool changed: {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
        self.eraser = false;
    }

    /// Selects a stroke colour and leaves eraser mode.
    pub fn set_color(&mut self, color: Color32) {
        log::info!("Color changed to {:?}", color);
        self.color = color;
        self.eraser = false;
    }

    pub fn set_dotted(&mut self, dotted: bool) {
        log::info!("Dotted set to {dotted}");
        self.dotted = dotted;
    }

    pub fn set_filled(&mut self, filled: bool) {
        log::info!("Fill set to {filled}");
        self.filled = filled;
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.eraser = eraser;
    }

    /// The eraser is a freehand tool that paints with the background colour.
    pub fn select_eraser(&mut self) {
        log::info!("Eraser selected");
        self.tool = ToolKind::Pencil;
        self.eraser = true;
    }

    /// Colour a freehand path is drawn with under the current settings.
    pub fn stroke_color(&self, background: Color32) -> Color32 {
        if self.eraser { background } else { self.color }
    }
}

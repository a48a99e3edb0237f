use egui::Color32;

use crate::canvas::Canvas;
use crate::state::{DrawingState, ToolKind};

/// Actions the toolbar can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTool(ToolKind),
    SelectEraser,
    SelectColor(Color32),
    SetDotted(bool),
    SetFilled(bool),
    /// Removes the most recently committed shape
    Undo,
    /// Removes every committed shape
    Clear,
}

impl Command {
    /// Applies the action. Returns `true` when the canvas needs repainting.
    pub fn execute(&self, state: &mut DrawingState, canvas: &mut Canvas) -> bool {
        match *self {
            Command::SelectTool(tool) => {
                state.set_tool(tool);
                false
            }
            Command::SelectEraser => {
                state.select_eraser();
                false
            }
            Command::SelectColor(color) => {
                state.set_color(color);
                false
            }
            Command::SetDotted(dotted) => {
                state.set_dotted(dotted);
                false
            }
            Command::SetFilled(filled) => {
                state.set_filled(filled);
                false
            }
            Command::Undo => canvas.undo(),
            Command::Clear => canvas.clear(),
        }
    }
}

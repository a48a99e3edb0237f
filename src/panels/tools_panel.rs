use crate::PaintApp;
use crate::command::Command;
use crate::components::ColorSwatch;
use crate::config::PALETTE;
use crate::state::ToolKind;

/// Top toolbar: tools, colours, stroke toggles, undo and clear.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let state = *app.state();
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            for tool in ToolKind::ALL {
                let selected = state.tool == tool && !state.eraser;
                if ui.selectable_label(selected, tool.name()).clicked() {
                    commands.push(Command::SelectTool(tool));
                }
            }
            if ui.selectable_label(state.eraser, "Eraser").clicked() {
                commands.push(Command::SelectEraser);
            }

            ui.separator();

            for color in PALETTE {
                let selected = state.color == color && !state.eraser;
                if ColorSwatch::new(color, selected).show(ui).clicked() {
                    commands.push(Command::SelectColor(color));
                }
            }

            ui.separator();

            let mut dotted = state.dotted;
            if ui.checkbox(&mut dotted, "Dotted").changed() {
                commands.push(Command::SetDotted(dotted));
            }
            let mut filled = state.filled;
            if ui.checkbox(&mut filled, "Fill").changed() {
                commands.push(Command::SetFilled(filled));
            }

            ui.separator();

            if ui.button("Undo").clicked() {
                commands.push(Command::Undo);
            }
            if ui.button("Clear").clicked() {
                commands.push(Command::Clear);
            }
        });
    });

    for command in commands {
        if app.execute_command(command) {
            ctx.request_repaint();
        }
    }
}

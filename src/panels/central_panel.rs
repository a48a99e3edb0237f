use crate::PaintApp;

/// The drawing area filling the rest of the window.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        if app.handle_input(ctx, canvas_rect) {
            ctx.request_repaint();
        }

        painter.rect_filled(canvas_rect, 0.0, app.canvas().background());
        app.render(&painter, canvas_rect);
    });
}

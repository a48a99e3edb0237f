use eframe::egui;

/// Square colour swatch; outlined when it is the active colour.
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(24.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 3.0, self.color);

            let outline = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.0, egui::Color32::from_gray(160))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(90))
            };
            ui.painter().rect_stroke(rect.expand(1.0), 3.0, outline);
        }

        response.on_hover_text(format!(
            "#{:02X}{:02X}{:02X}",
            self.color.r(),
            self.color.g(),
            self.color.b()
        ))
    }
}

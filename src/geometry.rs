use egui::{Pos2, Rect};

/// Vertices approximating the ellipse inscribed in `rect`, clockwise from the right.
pub fn ellipse_points(rect: Rect, segments: usize) -> Vec<Pos2> {
    let segments = segments.max(3);
    let center = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;

    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            egui::pos2(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

/// Corners of `rect` as a closed polyline (first corner repeated at the end).
pub fn rect_outline(rect: Rect) -> [Pos2; 5] {
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ]
}

//! Decorative background layer: paw-print silhouettes scattered across the
//! viewport without overlap, recomputed whenever the viewport size changes.

use eframe::egui;

use super::state::FieldLensApp;
use crate::layout::scatter;

impl FieldLensApp {
    /// Re-runs the scatter pass when the viewport first becomes available or
    /// its size changes. Resize recomputation is unthrottled; a pass over a
    /// handful of elements is far cheaper than a frame.
    pub fn maintain_decor(&mut self, viewport: egui::Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        let size = (viewport.x, viewport.y);
        if self.decor.last_viewport == Some(size) {
            return;
        }

        let mut rng = rand::rng();
        scatter(&mut self.decor.elements, viewport.x, viewport.y, &mut rng);
        self.decor.last_viewport = Some(size);
    }

    /// Paints the placed elements into `rect`. Anchors are percentages of
    /// the viewport, so painting converts back through the rect size.
    pub fn draw_decor(&self, painter: &egui::Painter, rect: egui::Rect) {
        if !self.decor_enabled {
            return;
        }

        let ink = if self.dark_mode {
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 10)
        } else {
            egui::Color32::from_rgba_unmultiplied(30, 30, 30, 14)
        };

        for element in &self.decor.elements {
            let Some(anchor) = element.anchor else { continue };
            let (x, y) = anchor.to_pixels(rect.width(), rect.height());
            let top_left = rect.min + egui::vec2(x, y);
            draw_paw_print(painter, top_left, element.size, ink);
        }
    }
}

/// A stylized paw print inside a `size`×`size` box: one large pad and three
/// toes arced above it.
fn draw_paw_print(painter: &egui::Painter, top_left: egui::Pos2, size: f32, ink: egui::Color32) {
    let center = top_left + egui::vec2(size * 0.5, size * 0.62);
    let pad_radius = size * 0.26;
    painter.circle_filled(center, pad_radius, ink);

    let toe_radius = size * 0.12;
    let toe_distance = size * 0.42;
    for angle_deg in [-50.0_f32, 0.0, 50.0] {
        let angle = angle_deg.to_radians();
        let offset = egui::vec2(angle.sin() * toe_distance, -angle.cos() * toe_distance);
        painter.circle_filled(center + offset, toe_radius, ink);
    }
}

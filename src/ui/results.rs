//! Result rendering: the loading bar while a request is outstanding and the
//! species card once the service has answered.

use eframe::egui;

use super::state::{FieldLensApp, UploadPhase};
use crate::constants::{LOADING_BAR_CEILING, LOADING_BAR_RATE};
use crate::types::display_stat_name;

/// Bar colors for the top predictions, best first.
const PREDICTION_BAR_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(22, 163, 74),
    egui::Color32::from_rgb(37, 99, 235),
    egui::Color32::from_rgb(220, 38, 38),
];

impl FieldLensApp {
    /// Renders the in-flight view: a loading bar that creeps toward 90% and
    /// never pretends to know how long the service will take.
    pub fn draw_loading_view(&mut self, ui: &mut egui::Ui) {
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let UploadPhase::InFlight {
            progress,
            file_name,
            ..
        } = &mut self.phase
        else {
            return;
        };

        *progress = (*progress + dt * LOADING_BAR_RATE).min(LOADING_BAR_CEILING);
        let label = if file_name.is_empty() {
            "Identifying…".to_string()
        } else {
            format!("Identifying {file_name}…")
        };
        let progress = *progress;

        ui.add_space((ui.available_height() * 0.25).max(24.0));
        ui.vertical_centered(|ui| {
            ui.heading(label);
            ui.add_space(12.0);
            ui.add(egui::ProgressBar::new(progress).desired_width(320.0));
        });

        // Keep the bar moving even without input events.
        ui.ctx().request_repaint();
    }

    /// Renders the species card for the completed identification.
    pub fn draw_result_view(&mut self, ui: &mut egui::Ui) {
        let profile = match &self.phase {
            UploadPhase::Complete { profile } => profile.clone(),
            _ => return,
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(&profile.name);
                ui.monospace(profile.dex_label());
                ui.add_space(8.0);

                ui.horizontal_wrapped(|ui| {
                    for type_name in &profile.types {
                        ui.label(
                            egui::RichText::new(format!(" {type_name} "))
                                .strong()
                                .background_color(type_badge_color(type_name)),
                        );
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(format!("Height: {}m", profile.height));
                    ui.separator();
                    ui.label(format!("Weight: {}kg", profile.weight));
                });

                ui.add_space(8.0);
                ui.label(&profile.description);

                ui.add_space(4.0);
                ui.hyperlink_to("Official artwork", profile.artwork_url());

                if !profile.base_stats.is_empty() {
                    ui.add_space(12.0);
                    ui.heading("Base stats");
                    egui::Grid::new("base_stats_grid")
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui| {
                            for (stat, value) in &profile.base_stats {
                                ui.label(display_stat_name(stat));
                                ui.label(value.to_string());
                                ui.end_row();
                            }
                        });
                }

                ui.add_space(12.0);
                ui.heading("Model confidence");
                let top = profile.top_predictions();
                if top.is_empty() {
                    ui.label("No prediction data available");
                } else {
                    for (index, pred) in top.iter().enumerate() {
                        ui.add_space(6.0);
                        draw_prediction_bar(ui, index, &pred.name, pred.percent_label(), pred.bar_fill());
                    }
                }

                ui.add_space(16.0);
                if ui.button("Identify another").clicked() {
                    self.reset_to_ready();
                }
                ui.add_space(12.0);
            });
        });
    }
}

fn draw_prediction_bar(ui: &mut egui::Ui, index: usize, name: &str, percent: String, fill: f32) {
    let width = ui.available_width().min(360.0);

    ui.scope(|ui| {
        ui.set_max_width(width);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(name).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(percent);
            });
        });
    });

    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 18.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let color = PREDICTION_BAR_COLORS[index.min(PREDICTION_BAR_COLORS.len() - 1)];
    let fill_rect = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width() * fill, rect.height()));
    painter.rect_filled(fill_rect, 4.0, color);
}

fn type_badge_color(type_name: &str) -> egui::Color32 {
    // Stable hue per tag so the same type always gets the same badge.
    let hash: u32 = type_name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let palette = [
        egui::Color32::from_rgb(77, 124, 15),
        egui::Color32::from_rgb(2, 132, 199),
        egui::Color32::from_rgb(180, 83, 9),
        egui::Color32::from_rgb(109, 40, 217),
        egui::Color32::from_rgb(190, 24, 93),
        egui::Color32::from_rgb(13, 148, 136),
    ];
    palette[(hash as usize) % palette.len()]
}

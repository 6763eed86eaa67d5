//! User interface components and rendering logic for the FieldLens client.
//!
//! This module contains all the UI-related code including the main
//! application struct, the upload flow, result rendering, the decorative
//! background layer, and the documentation window.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main FieldLensApp
//! - `upload` - Drop zone, file picking, and the async upload task
//! - `results` - Loading bar and the species card
//! - `decor` - Scattered paw-print background layer
//! - `docs` - Documentation window with copyable code blocks
//! - `highlighters` - Syntax highlighting for doc code blocks

mod decor;
mod docs;
mod highlighters;
mod results;
mod state;
mod upload;

#[cfg(test)]
mod tests;

pub use state::{FieldLensApp, UploadOutcome, UploadPhase, UploadRequest};

use crate::constants::STORAGE_KEY;
use crate::demo::{all_samples, sample_profile};
use eframe::egui;

/// Builds the app for eframe: restores persisted settings from storage and,
/// natively, creates the runtime the upload tasks run on.
pub fn create(
    cc: &eframe::CreationContext<'_>,
) -> Result<FieldLensApp, Box<dyn std::error::Error + Send + Sync>> {
    let mut app = cc
        .storage
        .and_then(|storage| storage.get_string(STORAGE_KEY))
        .and_then(|json| match FieldLensApp::from_json(&json) {
            Ok(app) => Some(app),
            Err(err) => {
                log::warn!("ignoring unreadable persisted state: {err}");
                None
            }
        })
        .unwrap_or_default();

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.runtime = Some(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?,
        );
    }

    Ok(app)
}

impl eframe::App for FieldLensApp {
    /// Persist user-facing settings between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string(STORAGE_KEY, json),
            Err(err) => log::error!("failed to serialize app state: {err}"),
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Handles upload plumbing first so outcomes from the channel are
    /// reflected in the same frame, then draws the toolbar, the central
    /// view for the current phase, and the documentation window.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.collect_dropped_files(ctx);
        self.handle_pending_uploads(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // The decor layer is sized to the central area and painted first
            // so every view renders on top of it.
            let rect = ui.max_rect();
            self.maintain_decor(rect.size());
            self.draw_decor(ui.painter(), rect);

            match self.phase {
                UploadPhase::Ready => self.draw_upload_zone(ui),
                UploadPhase::InFlight { .. } => self.draw_loading_view(ui),
                UploadPhase::Complete { .. } => self.draw_result_view(ui),
            }
        });

        self.draw_docs_window(ctx);
    }
}

impl FieldLensApp {
    /// Renders the toolbar: samples, service settings, and view options.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("FieldLens").strong());
            ui.separator();

            ui.menu_button("Samples", |ui| {
                for (kind, name) in all_samples() {
                    if ui.button(*name).clicked() {
                        self.show_profile(sample_profile(*kind));
                        ui.close();
                    }
                }
            });

            ui.menu_button("Service", |ui| {
                ui.label("Base URL:");
                ui.text_edit_singleline(&mut self.base_url);
            });

            ui.separator();
            ui.toggle_value(&mut self.docs_open, "Docs");
            ui.checkbox(&mut self.decor_enabled, "Decor");
            ui.checkbox(&mut self.dark_mode, "Dark Mode");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match &self.phase {
                    UploadPhase::Ready => {
                        ui.weak(self.base_url.clone());
                    }
                    UploadPhase::InFlight { file_name, .. } => {
                        if file_name.is_empty() {
                            ui.weak("uploading…");
                        } else {
                            ui.weak(format!("uploading {file_name}…"));
                        }
                    }
                    UploadPhase::Complete { profile } => {
                        ui.weak(format!("{} {}", profile.name, profile.dex_label()));
                    }
                }
            });
        });
    }
}

//! # FieldLens
//!
//! A desktop and web client for an image-classification field guide. Drop a
//! creature photo onto the window (or pick one with the file dialog) and the
//! app uploads it to a prediction service, then renders the identified
//! species' catalog entry together with the model's confidence in its top
//! guesses.
//!
//! ## Features
//! - Drag-and-drop or file-picker image upload
//! - Species card with catalog number, measurements, types, and base stats
//! - Top-3 prediction bars with percentage confidence
//! - Decorative paw prints scattered without overlap, re-laid-out on resize
//! - Built-in API documentation with copy-to-clipboard code blocks

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod client;
mod constants;
mod demo;
mod layout;
mod types;
mod ui;

// Re-export public types and functions
pub use client::*;
pub use layout::*;
pub use types::*;

/// Runs the FieldLens application with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop. Persisted settings are restored from eframe storage, and on
/// native targets an async runtime is created for the upload tasks.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use fieldlens::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "FieldLens",
        options,
        Box::new(|cc| Ok(Box::new(ui::create(cc)?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_points_at_the_upload_endpoint() {
        let client = PredictClient::new(crate::constants::DEFAULT_BASE_URL);
        assert!(client.upload_url().ends_with("/predict/upload"));
    }

    #[test]
    fn sample_profile_formats_like_the_service_response() {
        let profile = crate::demo::sample_profile(crate::demo::SampleKind::Verdanix);
        assert_eq!(profile.dex_label(), "#001");
        assert_eq!(profile.top_predictions().len(), 3);
    }
}

//! Shared application-wide constants.
//! Centralizes tweakable values used across the scatter layout, the upload
//! flow, and the documentation viewer.

// Decorative scatter layout
/// Margin (in viewport pixels) kept between decorative elements and every
/// viewport edge when sampling candidate positions.
pub const VIEWPORT_PADDING: f32 = 50.0;
/// Attempt budget per element before the placer accepts an overlapping
/// position as a fallback.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
/// Side lengths of the decorative paw prints, largest first so the big
/// prints claim open space before the viewport fills up.
pub const DECOR_SIZES: &[f32] = &[150.0, 120.0, 96.0, 72.0, 56.0, 44.0];

// Prediction rendering
/// Maximum number of prediction bars shown on the species card.
pub const MAX_PREDICTION_BARS: usize = 3;
/// Fraction the fake loading bar creeps toward while a request is in flight.
pub const LOADING_BAR_CEILING: f32 = 0.9;
/// Loading bar growth per second, as a fraction of the full bar.
pub const LOADING_BAR_RATE: f32 = 0.45;

// Prediction service
/// Environment variable that overrides the prediction service base URL.
pub const BASE_URL_ENV: &str = "FIELDLENS_BASE_URL";
/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Host serving the official species artwork referenced by catalog number.
pub const ARTWORK_BASE_URL: &str = "https://assets.fieldlens.dev";

// Documentation viewer
/// How long the copy button on a code block reads "Copied!" after a click.
pub const COPY_FEEDBACK_SECS: f64 = 2.0;

/// Key under which the application state is persisted in eframe storage.
pub const STORAGE_KEY: &str = "app_state";

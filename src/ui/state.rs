//! Application state management structures.
//!
//! This module contains the state structures that track the client's current
//! UI state: the upload lifecycle, the decorative background layer, the
//! documentation viewer, and the main `FieldLensApp` itself.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use uuid::Uuid;

use crate::constants::{DECOR_SIZES, DEFAULT_BASE_URL};
use crate::layout::DecorElement;
use crate::types::SpeciesProfile;

/// Token identifying one upload attempt. Outcomes carrying a token that no
/// longer matches the in-flight upload are discarded as stale.
pub type UploadToken = Uuid;

/// Where the upload flow currently stands. Exactly one view is shown per
/// phase; a failure reverts to `Ready` so the drop zone is visible again.
#[derive(Debug)]
pub enum UploadPhase {
    /// Waiting for the user to drop or pick an image.
    Ready,
    /// An upload is outstanding; the fake loading bar is animating.
    InFlight {
        /// Token matched against incoming outcomes.
        token: UploadToken,
        /// Name of the file being classified, for the status line.
        file_name: String,
        /// Current fill of the loading bar, `0..=1`.
        progress: f32,
    },
    /// The service answered; the species card is shown.
    Complete {
        /// The decoded profile being displayed.
        profile: SpeciesProfile,
    },
}

impl Default for UploadPhase {
    fn default() -> Self {
        UploadPhase::Ready
    }
}

impl UploadPhase {
    /// Token of the in-flight upload, if any.
    pub fn token(&self) -> Option<UploadToken> {
        match self {
            UploadPhase::InFlight { token, .. } => Some(*token),
            _ => None,
        }
    }
}

/// An upload the UI has requested but not yet spawned.
#[derive(Debug)]
pub enum UploadRequest {
    /// Open a file picker, then upload the chosen image.
    PickFile,
    /// Upload bytes already in memory (dropped file on web, or any source
    /// that handed us the content directly).
    Bytes {
        /// Original file name, forwarded as the multipart file name.
        file_name: String,
        /// Raw image bytes.
        bytes: Vec<u8>,
    },
    /// Read the file at `path`, then upload it (native drops).
    #[cfg(not(target_arch = "wasm32"))]
    Path {
        /// Path of the dropped file on disk.
        path: std::path::PathBuf,
    },
}

/// Messages sent from upload tasks back to the main app.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The service identified the image.
    Classified {
        /// Token of the upload this outcome belongs to.
        token: UploadToken,
        /// The decoded profile.
        profile: Box<SpeciesProfile>,
    },
    /// The upload or decode failed; the message is for the log.
    Failed {
        /// Token of the upload this outcome belongs to.
        token: UploadToken,
        /// Human-readable failure description.
        error: String,
    },
    /// The user dismissed the file picker without choosing anything.
    Cancelled {
        /// Token of the upload this outcome belongs to.
        token: UploadToken,
    },
}

/// State of the decorative background layer.
pub struct DecorState {
    /// The elements handed to the scatter pass, in placement-priority order.
    pub elements: Vec<DecorElement>,
    /// Viewport size of the most recent pass; a size change triggers a
    /// fresh pass.
    pub last_viewport: Option<(f32, f32)>,
}

impl Default for DecorState {
    fn default() -> Self {
        Self {
            elements: DECOR_SIZES.iter().map(|&s| DecorElement::new(s)).collect(),
            last_viewport: None,
        }
    }
}

/// State of the documentation window.
#[derive(Default)]
pub struct DocsState {
    /// Index of the selected page.
    pub selected_page: usize,
    /// Per-code-block deadlines (egui time, seconds) until which the copy
    /// button reads "Copied!". Keyed by (page index, block index).
    pub copied_until: HashMap<(usize, usize), f64>,
}

impl DocsState {
    /// Whether the given block should currently show copy feedback.
    pub fn feedback_active(&self, page: usize, block: usize, now: f64) -> bool {
        self.copied_until
            .get(&(page, block))
            .is_some_and(|deadline| now < *deadline)
    }

    /// Records a copy click, starting the feedback window.
    pub fn mark_copied(&mut self, page: usize, block: usize, until: f64) {
        self.copied_until.insert((page, block), until);
    }

    /// Drops feedback entries whose window has passed.
    pub fn prune_expired(&mut self, now: f64) {
        self.copied_until.retain(|_, deadline| now < *deadline);
    }
}

/// The main application structure containing UI state and upload plumbing.
///
/// This struct implements the `eframe::App` trait and handles all user
/// interface rendering and interaction logic.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLensApp {
    /// Whether dark mode visuals are enabled.
    pub dark_mode: bool,
    /// Base URL of the prediction service, editable from the toolbar.
    pub base_url: String,
    /// Whether the documentation window is open.
    pub docs_open: bool,
    /// Whether the decorative background layer is painted.
    pub decor_enabled: bool,

    /// Current phase of the upload flow.
    #[serde(skip)]
    pub phase: UploadPhase,
    /// An upload requested this frame, spawned by the pending-upload pass.
    #[serde(skip)]
    pub pending_upload: Option<UploadRequest>,
    /// Channel for receiving upload outcomes from async contexts.
    #[serde(skip)]
    pub upload_sender: Option<Sender<UploadOutcome>>,
    #[serde(skip)]
    pub upload_receiver: Option<Receiver<UploadOutcome>>,
    /// One-line status shown under the drop zone after a failure.
    #[serde(skip)]
    pub status_line: Option<String>,

    /// Decorative background layer state.
    #[serde(skip)]
    pub decor: DecorState,
    /// Documentation window state.
    #[serde(skip)]
    pub docs: DocsState,

    /// Runtime the upload tasks run on. Created once at app construction;
    /// `None` only in tests that never spawn.
    #[cfg(not(target_arch = "wasm32"))]
    #[serde(skip)]
    pub runtime: Option<tokio::runtime::Runtime>,
}

impl Default for FieldLensApp {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            dark_mode: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            docs_open: false,
            decor_enabled: true,
            phase: UploadPhase::Ready,
            pending_upload: None,
            upload_sender: Some(sender),
            upload_receiver: Some(receiver),
            status_line: None,
            decor: DecorState::default(),
            docs: DocsState::default(),
            #[cfg(not(target_arch = "wasm32"))]
            runtime: None,
        }
    }
}

impl FieldLensApp {
    /// Serializes the persistable application state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Shows the given profile, replacing whatever the upload flow was doing.
    pub fn show_profile(&mut self, profile: SpeciesProfile) {
        self.status_line = None;
        self.phase = UploadPhase::Complete { profile };
    }

    /// Returns to the upload-ready view, clearing any shown result.
    pub fn reset_to_ready(&mut self) {
        self.status_line = None;
        self.phase = UploadPhase::Ready;
    }
}

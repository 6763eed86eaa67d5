//! Upload handling: the drop zone, file picking, and the async upload task.
//!
//! Uploads run off the UI thread (a tokio task natively, a `spawn_local`
//! future on wasm) and report back through the app's mpsc channel. The UI
//! polls the channel once per frame; outcomes whose token no longer matches
//! the in-flight upload are discarded as stale.

use eframe::egui;
use uuid::Uuid;

use super::state::{FieldLensApp, UploadOutcome, UploadPhase, UploadRequest, UploadToken};
use crate::client::PredictClient;

impl FieldLensApp {
    /// Picks up files dropped onto the window and queues them for upload.
    ///
    /// Only the first dropped file is taken; drops are ignored while an
    /// upload is already in flight (no queueing).
    pub fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if matches!(self.phase, UploadPhase::InFlight { .. }) {
            log::warn!("ignoring dropped file while an upload is in flight");
            return;
        }

        if let Some(bytes) = file.bytes {
            let file_name = if file.name.is_empty() {
                "upload.png".to_string()
            } else {
                file.name
            };
            self.pending_upload = Some(UploadRequest::Bytes {
                file_name,
                bytes: bytes.to_vec(),
            });
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = file.path {
            self.pending_upload = Some(UploadRequest::Path { path });
        }
    }

    /// Drains completed upload outcomes and spawns any newly requested
    /// upload. Called once per frame before the panels are drawn.
    pub fn handle_pending_uploads(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.upload_receiver {
            let mut outcomes = Vec::new();
            while let Ok(outcome) = receiver.try_recv() {
                outcomes.push(outcome);
            }
            for outcome in outcomes {
                self.apply_upload_outcome(outcome);
            }
        }

        if let Some(request) = self.pending_upload.take() {
            let token = Uuid::new_v4();
            let file_name = request_file_name(&request);
            if self.spawn_upload(ctx, request, token) {
                self.status_line = None;
                self.phase = UploadPhase::InFlight {
                    token,
                    file_name,
                    progress: 0.0,
                };
            }
        }
    }

    /// Applies one outcome from an upload task to the app state.
    pub fn apply_upload_outcome(&mut self, outcome: UploadOutcome) {
        match outcome {
            UploadOutcome::Classified { token, profile } => {
                if self.phase.token() == Some(token) {
                    log::info!("identified {} ({})", profile.name, profile.dex_label());
                    self.show_profile(*profile);
                } else {
                    log::debug!("discarding stale classification result");
                }
            }
            UploadOutcome::Failed { token, error } => {
                if self.phase.token() == Some(token) {
                    log::error!("upload failed: {error}");
                    self.status_line =
                        Some("Identification failed. Check the service and try again.".to_string());
                    self.phase = UploadPhase::Ready;
                }
            }
            UploadOutcome::Cancelled { token } => {
                if self.phase.token() == Some(token) {
                    self.phase = UploadPhase::Ready;
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_upload(&self, ctx: &egui::Context, request: UploadRequest, token: UploadToken) -> bool {
        let Some(runtime) = &self.runtime else {
            log::error!("no async runtime available; cannot start the upload");
            return false;
        };
        let sender = self.upload_sender.clone();
        let client = PredictClient::new(self.base_url.clone());
        let ctx = ctx.clone();
        runtime.spawn(async move {
            let outcome = run_upload(request, client, token).await;
            if let Some(tx) = sender {
                let _ = tx.send(outcome);
            }
            ctx.request_repaint();
        });
        true
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_upload(&self, ctx: &egui::Context, request: UploadRequest, token: UploadToken) -> bool {
        let sender = self.upload_sender.clone();
        let client = PredictClient::new(self.base_url.clone());
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = run_upload(request, client, token).await;
            if let Some(tx) = sender {
                let _ = tx.send(outcome);
            }
            ctx.request_repaint();
        });
        true
    }

    /// Renders the upload-ready view: a dashed drop zone with a Browse
    /// button, plus the failure status line when the last upload went wrong.
    pub fn draw_upload_zone(&mut self, ui: &mut egui::Ui) {
        let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        ui.add_space((ui.available_height() * 0.16).max(16.0));
        ui.vertical_centered(|ui| {
            let frame = egui::Frame::default()
                .inner_margin(egui::Margin::same(36))
                .show(ui, |ui| {
                    ui.set_min_size(egui::vec2(380.0, 150.0));
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("🖼").size(44.0));
                        ui.add_space(6.0);
                        let prompt = if hovering_files {
                            "Release to identify"
                        } else {
                            "Drop a creature photo here"
                        };
                        ui.heading(prompt);
                        ui.add_space(4.0);
                        ui.label("or");
                        ui.add_space(4.0);
                        if ui.button("Browse…").clicked() {
                            self.pending_upload = Some(UploadRequest::PickFile);
                        }
                    });
                });

            let stroke = if hovering_files {
                egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
            } else {
                egui::Stroke::new(1.0, ui.visuals().weak_text_color())
            };
            draw_dashed_rect(ui.painter(), frame.response.rect, stroke);

            if let Some(status) = &self.status_line {
                ui.add_space(12.0);
                ui.colored_label(ui.visuals().error_fg_color, status);
            }
        });
    }
}

fn request_file_name(request: &UploadRequest) -> String {
    match request {
        UploadRequest::Bytes { file_name, .. } => file_name.clone(),
        #[cfg(not(target_arch = "wasm32"))]
        UploadRequest::Path { path } => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        UploadRequest::PickFile => String::new(),
    }
}

fn draw_dashed_rect(painter: &egui::Painter, rect: egui::Rect, stroke: egui::Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    for i in 0..4 {
        painter.extend(egui::Shape::dashed_line(
            &[corners[i], corners[(i + 1) % 4]],
            stroke,
            8.0,
            6.0,
        ));
    }
}

/// Resolves the request to a file name and bytes, runs the classification
/// call, and wraps the result as an outcome for the UI channel.
#[cfg(not(target_arch = "wasm32"))]
async fn run_upload(
    request: UploadRequest,
    client: PredictClient,
    token: UploadToken,
) -> UploadOutcome {
    let picked = match request {
        UploadRequest::PickFile => {
            match rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                .pick_file()
                .await
            {
                Some(handle) => {
                    let file_name = handle.file_name();
                    let bytes = handle.read().await;
                    Some((file_name, bytes))
                }
                None => None,
            }
        }
        UploadRequest::Bytes { file_name, bytes } => Some((file_name, bytes)),
        UploadRequest::Path { path } => {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.png".to_string());
            match std::fs::read(&path) {
                Ok(bytes) => Some((file_name, bytes)),
                Err(e) => {
                    return UploadOutcome::Failed {
                        token,
                        error: format!("failed to read {}: {e}", path.display()),
                    }
                }
            }
        }
    };

    classify_picked(picked, client, token).await
}

#[cfg(target_arch = "wasm32")]
async fn run_upload(
    request: UploadRequest,
    client: PredictClient,
    token: UploadToken,
) -> UploadOutcome {
    let picked = match request {
        UploadRequest::PickFile => match pick_image_file().await {
            Some(file) => {
                let file_name = file.name();
                match read_file_bytes(&file).await {
                    Ok(bytes) => Some((file_name, bytes)),
                    Err(error) => return UploadOutcome::Failed { token, error },
                }
            }
            None => None,
        },
        UploadRequest::Bytes { file_name, bytes } => Some((file_name, bytes)),
    };

    classify_picked(picked, client, token).await
}

async fn classify_picked(
    picked: Option<(String, Vec<u8>)>,
    client: PredictClient,
    token: UploadToken,
) -> UploadOutcome {
    match picked {
        None => UploadOutcome::Cancelled { token },
        Some((file_name, bytes)) => match client.classify(&file_name, bytes).await {
            Ok(profile) => UploadOutcome::Classified {
                token,
                profile: Box::new(profile),
            },
            Err(e) => UploadOutcome::Failed {
                token,
                error: e.to_string(),
            },
        },
    }
}

/// Opens a transient `<input type="file">` element and waits for the user
/// to choose an image (wasm only; browsers gate pickers behind an element).
#[cfg(target_arch = "wasm32")]
async fn pick_image_file() -> Option<web_sys::File> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let document = window.document()?;

    let input = document
        .create_element("input")
        .ok()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.set_type("file");
    input.set_accept("image/*");
    input.style().set_property("display", "none").ok()?;

    let (sender, receiver) = futures::channel::oneshot::channel::<Option<web_sys::File>>();
    let sender = std::rc::Rc::new(std::cell::RefCell::new(Some(sender)));

    let onchange = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let input = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            let file = input.files().and_then(|files| files.get(0));
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(file);
            }
        }
    }) as Box<dyn FnMut(_)>);
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    document.body()?.append_child(&input).ok()?;
    input.click();

    let file = receiver.await.ok()??;
    document.body()?.remove_child(&input).ok()?;
    Some(file)
}

/// Reads a browser `File` into bytes via its array-buffer promise.
#[cfg(target_arch = "wasm32")]
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read file: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

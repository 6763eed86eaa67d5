use super::state::{DocsState, FieldLensApp, UploadOutcome, UploadPhase, UploadRequest};
use crate::demo::{sample_profile, SampleKind};
use eframe::egui;
use uuid::Uuid;

/// Run a single headless egui frame with the provided raw input and closure.
fn run_frame(ctx: &egui::Context, raw: egui::RawInput, mut f: impl FnMut(&egui::Context)) {
    let _ = ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        f(ctx);
    });
}

fn default_raw_input() -> egui::RawInput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw
}

fn in_flight(app: &mut FieldLensApp) -> Uuid {
    let token = Uuid::new_v4();
    app.phase = UploadPhase::InFlight {
        token,
        file_name: "creature.png".to_string(),
        progress: 0.0,
    };
    token
}

#[test]
fn failed_upload_reverts_to_the_ready_view() {
    let mut app = FieldLensApp::default();
    let token = in_flight(&mut app);

    app.apply_upload_outcome(UploadOutcome::Failed {
        token,
        error: "connection refused".to_string(),
    });

    assert!(matches!(app.phase, UploadPhase::Ready));
    assert!(app.status_line.is_some());
}

#[test]
fn stale_outcomes_are_discarded() {
    let mut app = FieldLensApp::default();
    let current = in_flight(&mut app);

    // An outcome from a superseded upload must not disturb the current one.
    app.apply_upload_outcome(UploadOutcome::Failed {
        token: Uuid::new_v4(),
        error: "too late".to_string(),
    });

    assert_eq!(app.phase.token(), Some(current));
    assert!(app.status_line.is_none());
}

#[test]
fn classified_outcome_shows_the_species_card() {
    let mut app = FieldLensApp::default();
    let token = in_flight(&mut app);

    app.apply_upload_outcome(UploadOutcome::Classified {
        token,
        profile: Box::new(sample_profile(SampleKind::Verdanix)),
    });

    match &app.phase {
        UploadPhase::Complete { profile } => assert_eq!(profile.name, "Verdanix"),
        other => panic!("expected Complete, got {other:?}"),
    }
}

#[test]
fn cancelled_pick_returns_to_ready_without_a_status_line() {
    let mut app = FieldLensApp::default();
    let token = in_flight(&mut app);

    app.apply_upload_outcome(UploadOutcome::Cancelled { token });

    assert!(matches!(app.phase, UploadPhase::Ready));
    assert!(app.status_line.is_none());
}

#[test]
fn outcomes_flow_through_the_channel_each_frame() {
    let mut app = FieldLensApp::default();
    let token = in_flight(&mut app);

    let sender = app.upload_sender.clone().expect("sender");
    sender
        .send(UploadOutcome::Failed {
            token,
            error: "boom".to_string(),
        })
        .expect("send");

    let ctx = egui::Context::default();
    app.handle_pending_uploads(&ctx);

    assert!(matches!(app.phase, UploadPhase::Ready));
    assert!(app.status_line.is_some());
}

#[test]
fn dropped_file_queues_an_upload() {
    let mut app = FieldLensApp::default();
    let ctx = egui::Context::default();

    let mut raw = default_raw_input();
    raw.dropped_files = vec![egui::DroppedFile {
        name: "creature.png".to_string(),
        bytes: Some(std::sync::Arc::from(vec![0x89, 0x50, 0x4e, 0x47])),
        ..Default::default()
    }];

    run_frame(&ctx, raw, |ctx| {
        app.collect_dropped_files(ctx);
    });

    match app.pending_upload {
        Some(UploadRequest::Bytes {
            ref file_name,
            ref bytes,
        }) => {
            assert_eq!(file_name, "creature.png");
            assert_eq!(bytes.len(), 4);
        }
        ref other => panic!("expected queued bytes upload, got {other:?}"),
    }
}

#[test]
fn drops_are_ignored_while_an_upload_is_in_flight() {
    let mut app = FieldLensApp::default();
    in_flight(&mut app);
    let ctx = egui::Context::default();

    let mut raw = default_raw_input();
    raw.dropped_files = vec![egui::DroppedFile {
        name: "second.png".to_string(),
        bytes: Some(std::sync::Arc::from(vec![1u8, 2, 3])),
        ..Default::default()
    }];

    run_frame(&ctx, raw, |ctx| {
        app.collect_dropped_files(ctx);
    });

    assert!(app.pending_upload.is_none());
}

#[test]
fn scatter_reruns_only_when_the_viewport_size_changes() {
    let mut app = FieldLensApp::default();

    app.maintain_decor(egui::vec2(1200.0, 800.0));
    let first: Vec<_> = app.decor.elements.iter().map(|e| e.anchor).collect();
    assert!(first.iter().all(|a| a.is_some()));

    // Same size: the pass must not re-run, so anchors stay identical.
    app.maintain_decor(egui::vec2(1200.0, 800.0));
    let second: Vec<_> = app.decor.elements.iter().map(|e| e.anchor).collect();
    assert_eq!(first, second);

    // New size: a fresh pass is recorded.
    app.maintain_decor(egui::vec2(900.0, 700.0));
    assert_eq!(app.decor.last_viewport, Some((900.0, 700.0)));
    assert!(app.decor.elements.iter().all(|e| e.anchor.is_some()));
}

#[test]
fn zero_sized_viewports_are_ignored() {
    let mut app = FieldLensApp::default();
    app.maintain_decor(egui::vec2(0.0, 600.0));
    assert!(app.decor.last_viewport.is_none());
}

#[test]
fn copy_feedback_expires_after_the_deadline() {
    let mut docs = DocsState::default();
    let now = 100.0;

    docs.mark_copied(0, 1, now + 2.0);
    assert!(docs.feedback_active(0, 1, now));
    assert!(docs.feedback_active(0, 1, now + 1.9));
    assert!(!docs.feedback_active(0, 1, now + 2.0));
    assert!(!docs.feedback_active(0, 0, now));

    docs.prune_expired(now + 3.0);
    assert!(docs.copied_until.is_empty());
}

#[test]
fn views_render_without_panicking() {
    let mut app = FieldLensApp::default();
    let ctx = egui::Context::default();

    // Upload-ready view.
    run_frame(&ctx, default_raw_input(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_upload_zone(ui);
        });
    });

    // Loading view.
    in_flight(&mut app);
    run_frame(&ctx, default_raw_input(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_loading_view(ui);
        });
    });

    // Species card.
    app.show_profile(sample_profile(SampleKind::Tidelet));
    run_frame(&ctx, default_raw_input(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_result_view(ui);
        });
    });

    // Documentation window with code blocks.
    app.docs_open = true;
    run_frame(&ctx, default_raw_input(), |ctx| {
        app.draw_docs_window(ctx);
    });
    assert!(app.docs_open);
}

#[test]
fn decor_paints_inside_the_given_rect() {
    let mut app = FieldLensApp::default();
    let ctx = egui::Context::default();

    app.maintain_decor(egui::vec2(1200.0, 800.0));
    run_frame(&ctx, default_raw_input(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            app.draw_decor(ui.painter(), rect);
        });
    });
}

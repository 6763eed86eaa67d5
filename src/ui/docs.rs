//! Built-in documentation window.
//!
//! A few static pages describing the prediction service. Every code block
//! carries a copy button that puts the block's exact text on the clipboard
//! and reads "Copied!" for a couple of seconds afterwards.

use eframe::egui;

use super::highlighters::{self, CodeLang};
use super::state::FieldLensApp;
use crate::constants::COPY_FEEDBACK_SECS;

/// One renderable unit of a documentation page.
pub enum DocBlock {
    /// Section heading.
    Heading(&'static str),
    /// Body paragraph.
    Text(&'static str),
    /// Copyable code block.
    Code {
        /// Language used for highlighting and the corner label.
        lang: CodeLang,
        /// The exact text the copy button places on the clipboard.
        source: &'static str,
    },
}

/// A documentation page: a tab title plus its blocks.
pub struct DocPage {
    /// Tab label.
    pub title: &'static str,
    /// Page content, in order.
    pub blocks: &'static [DocBlock],
}

/// The built-in documentation pages.
pub fn pages() -> &'static [DocPage] {
    &[
        DocPage {
            title: "Quick start",
            blocks: &[
                DocBlock::Heading("Identify an image"),
                DocBlock::Text(
                    "Send the image as multipart form data under the `file` field. \
                     One request returns the catalog entry and the ranked predictions \
                     together.",
                ),
                DocBlock::Code {
                    lang: CodeLang::Shell,
                    source: "curl -X POST \\\n  -F \"file=@creature.png\" \\\n  http://127.0.0.1:5000/predict/upload",
                },
                DocBlock::Text(
                    "A non-success status means the image could not be classified; the \
                     client shows the drop zone again and leaves retrying to you.",
                ),
            ],
        },
        DocPage {
            title: "Response",
            blocks: &[
                DocBlock::Heading("Response shape"),
                DocBlock::Text(
                    "Confidences are fractions in [0, 1]. Predictions arrive best \
                     first and are rendered as received; blank names are skipped and \
                     at most three bars are shown.",
                ),
                DocBlock::Code {
                    lang: CodeLang::Json,
                    source: "{\n  \"dex_number\": 1,\n  \"name\": \"Verdanix\",\n  \"height\": 0.7,\n  \"weight\": 6.9,\n  \"description\": \"The seed on its back soaks up sunlight.\",\n  \"types\": [\"grass\", \"poison\"],\n  \"base_stats\": {\"hp\": 45, \"attack\": 49},\n  \"predictions\": [\n    {\"name\": \"Verdanix\", \"confidence\": 0.823},\n    {\"name\": \"Thornling\", \"confidence\": 0.102}\n  ]\n}",
                },
                DocBlock::Heading("Artwork"),
                DocBlock::Text(
                    "Official artwork is addressed by catalog number, zero-padded to \
                     three digits:",
                ),
                DocBlock::Code {
                    lang: CodeLang::Shell,
                    source: "https://assets.fieldlens.dev/images/001.png",
                },
            ],
        },
    ]
}

impl FieldLensApp {
    /// Shows the documentation window when it is open.
    pub fn draw_docs_window(&mut self, ctx: &egui::Context) {
        if !self.docs_open {
            return;
        }
        let mut open = self.docs_open;
        egui::Window::new("Documentation")
            .open(&mut open)
            .default_size(egui::vec2(560.0, 460.0))
            .show(ctx, |ui| {
                self.draw_docs_body(ui);
            });
        self.docs_open = open;
    }

    fn draw_docs_body(&mut self, ui: &mut egui::Ui) {
        let now = ui.input(|i| i.time);
        self.docs.prune_expired(now);

        ui.horizontal(|ui| {
            for (idx, page) in pages().iter().enumerate() {
                if ui
                    .selectable_label(self.docs.selected_page == idx, page.title)
                    .clicked()
                {
                    self.docs.selected_page = idx;
                }
            }
        });
        ui.separator();

        let page_idx = self.docs.selected_page.min(pages().len() - 1);
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (block_idx, block) in pages()[page_idx].blocks.iter().enumerate() {
                match block {
                    DocBlock::Heading(text) => {
                        ui.add_space(8.0);
                        ui.heading(*text);
                    }
                    DocBlock::Text(text) => {
                        ui.add_space(4.0);
                        ui.label(*text);
                    }
                    DocBlock::Code { lang, source } => {
                        ui.add_space(6.0);
                        self.draw_code_block(ui, page_idx, block_idx, *lang, source, now);
                    }
                }
            }
            ui.add_space(8.0);
        });
    }

    fn draw_code_block(
        &mut self,
        ui: &mut egui::Ui,
        page: usize,
        block: usize,
        lang: CodeLang,
        source: &str,
        now: f64,
    ) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(lang.label()).small().weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let copied = self.docs.feedback_active(page, block, now);
                    let label = if copied { "Copied!" } else { "Copy" };
                    if ui.small_button(label).clicked() {
                        ui.ctx().copy_text(source.to_string());
                        self.docs.mark_copied(page, block, now + COPY_FEEDBACK_SECS);
                        // Wake up again to flip the label back.
                        ui.ctx().request_repaint_after(std::time::Duration::from_secs_f64(
                            COPY_FEEDBACK_SECS,
                        ));
                    }
                });
            });

            let font_id = egui::TextStyle::Monospace.resolve(ui.style());
            let job = highlighters::highlight(lang, source, font_id, self.dark_mode);
            ui.label(job);
        });
    }
}

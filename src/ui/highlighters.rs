//! Syntax highlighting for the documentation code blocks.
//!
//! Deliberately small: enough token awareness to make JSON payloads and
//! shell one-liners readable, nothing more.

use eframe::egui::{self, Color32};
use eframe::epaint::text::{LayoutJob, TextFormat};

/// Languages the documentation blocks can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLang {
    /// Shell command lines (curl examples, URLs).
    Shell,
    /// JSON payloads.
    Json,
}

impl CodeLang {
    /// Short label shown in the block's corner.
    pub fn label(&self) -> &'static str {
        match self {
            CodeLang::Shell => "shell",
            CodeLang::Json => "json",
        }
    }
}

struct Palette {
    string: Color32,
    number: Color32,
    keyword: Color32,
    comment: Color32,
    default: Color32,
}

fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            string: Color32::from_rgb(206, 145, 120),
            number: Color32::from_rgb(181, 206, 168),
            keyword: Color32::from_rgb(86, 156, 214),
            comment: Color32::from_rgb(106, 153, 85),
            default: Color32::from_rgb(212, 212, 212),
        }
    } else {
        Palette {
            string: Color32::from_rgb(163, 21, 21),
            number: Color32::from_rgb(100, 0, 150),
            keyword: Color32::from_rgb(0, 0, 170),
            comment: Color32::from_rgb(0, 128, 0),
            default: Color32::BLACK,
        }
    }
}

/// Highlights `text` for the given language.
pub fn highlight(lang: CodeLang, text: &str, font_id: egui::FontId, dark_mode: bool) -> LayoutJob {
    let colors = palette(dark_mode);
    let mut job = LayoutJob::default();
    let append = |job: &mut LayoutJob, fragment: &str, color: Color32, font_id: &egui::FontId| {
        if !fragment.is_empty() {
            job.append(fragment, 0.0, TextFormat::simple(font_id.clone(), color));
        }
    };

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        // Strings, both languages.
        if c == '"' || (lang == CodeLang::Shell && c == '\'') {
            let quote = c;
            let mut escaped = false;
            for (_, ch) in chars.by_ref() {
                if escaped {
                    escaped = false;
                    continue;
                }
                if ch == '\\' {
                    escaped = true;
                    continue;
                }
                if ch == quote {
                    break;
                }
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            append(&mut job, &text[i..end], colors.string, &font_id);
            continue;
        }

        // Shell comments run to end of line.
        if lang == CodeLang::Shell && c == '#' {
            while let Some(&(_, ch)) = chars.peek() {
                if ch == '\n' {
                    break;
                }
                chars.next();
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            append(&mut job, &text[i..end], colors.comment, &font_id);
            continue;
        }

        // Numbers, including a leading minus.
        if c.is_ascii_digit()
            || (c == '-'
                && chars
                    .peek()
                    .map(|&(_, ch)| ch.is_ascii_digit())
                    .unwrap_or(false))
        {
            while let Some(&(_, ch)) = chars.peek() {
                if ch.is_ascii_digit() || ch == '.' || ch == 'e' || ch == 'E' || ch == '+' {
                    chars.next();
                } else {
                    break;
                }
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            append(&mut job, &text[i..end], colors.number, &font_id);
            continue;
        }

        // Words: JSON literals and shell flags/commands get the keyword color.
        if c.is_alphabetic() || c == '_' || c == '-' {
            while let Some(&(_, ch)) = chars.peek() {
                if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                    chars.next();
                } else {
                    break;
                }
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            let word = &text[i..end];
            let color = match lang {
                CodeLang::Json if matches!(word, "true" | "false" | "null") => colors.keyword,
                CodeLang::Shell if word.starts_with('-') || word == "curl" => colors.keyword,
                _ => colors.default,
            };
            append(&mut job, word, color, &font_id);
            continue;
        }

        append(&mut job, &text[i..i + c.len_utf8()], colors.default, &font_id);
    }

    job
}

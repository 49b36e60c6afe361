// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption editor panel.
//!
//! This module shows the original caption with its marked spans
//! highlighted, the marking buttons and the corrections editor.

use crate::models::{
    annotation::{AnnotationSet, MarkKind},
    caption::CaptionRecord,
};
use crate::session::{Command, Draft};
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId};

/// Background of spans marked correct.
pub const CORRECT_BG: Color32 = Color32::from_rgb(0x90, 0xEE, 0x90);
/// Background of spans marked incorrect.
pub const INCORRECT_BG: Color32 = Color32::from_rgb(0xFF, 0xB6, 0xC1);

/// Result of one frame of the caption editor.
#[derive(Default)]
pub struct EditorResponse {
    /// The user changed caption or corrections text.
    pub edited: bool,
    pub command: Option<Command>,
}

fn background(kind: MarkKind) -> Color32 {
    match kind {
        MarkKind::Correct => CORRECT_BG,
        MarkKind::Incorrect => INCORRECT_BG,
    }
}

/// Lay out `text` with each annotated span on its highlight colour.
///
/// Later annotations paint over earlier ones; spans past the end of the
/// text are clamped.
pub fn highlight_job(text: &str, annotations: &AnnotationSet, font_id: FontId, text_color: Color32) -> LayoutJob {
    let mut bytes: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
    let len = bytes.len();
    bytes.push(text.len());

    let mut marks: Vec<Option<MarkKind>> = vec![None; len];
    for annotation in annotations.iter() {
        let end = annotation.end.min(len);
        for slot in marks.iter_mut().take(end).skip(annotation.start) {
            *slot = Some(annotation.kind);
        }
    }

    let mut job = LayoutJob::default();
    let mut run_start = 0;
    for i in 1..=len {
        if i == len || marks[i] != marks[run_start] {
            let format = match marks[run_start] {
                Some(kind) => TextFormat {
                    font_id: font_id.clone(),
                    color: Color32::BLACK,
                    background: background(kind),
                    ..Default::default()
                },
                None => TextFormat {
                    font_id: font_id.clone(),
                    color: text_color,
                    ..Default::default()
                },
            };
            job.append(&text[bytes[run_start]..bytes[i]], 0.0, format);
            run_start = i;
        }
    }
    job
}

/// Display the caption editor for the current draft.
pub fn show(ui: &mut egui::Ui, draft: &mut Draft) -> EditorResponse {
    let mut response = EditorResponse::default();
    let Draft { record, selection } = draft;
    let CaptionRecord {
        original_text,
        corrections,
        annotations,
    } = record;

    ui.label("Original Caption:");
    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let text_color = ui.visuals().text_color();
    let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| {
        let mut job = highlight_job(text, annotations, font_id.clone(), text_color);
        job.wrap.max_width = wrap_width;
        ui.fonts(|f| f.layout_job(job))
    };

    let output = egui::TextEdit::multiline(original_text)
        .hint_text("Original caption")
        .desired_width(f32::INFINITY)
        .desired_rows(8)
        .layouter(&mut layouter)
        .show(ui);
    response.edited |= output.response.changed();

    // The range is only reported while the editor has focus; keep the last
    // one so the mark buttons can use it after focus moves to them.
    if let Some(range) = output.cursor_range {
        let a = range.primary.ccursor.index;
        let b = range.secondary.ccursor.index;
        *selection = Some((a.min(b), a.max(b)));
    }

    ui.horizontal(|ui| {
        let has_selection = selection.is_some_and(|(a, b)| a != b);
        if ui
            .add_enabled(has_selection, egui::Button::new("Mark Correct").fill(CORRECT_BG.gamma_multiply(0.4)))
            .clicked()
        {
            response.command = Some(Command::Mark(MarkKind::Correct));
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Mark Incorrect").fill(INCORRECT_BG.gamma_multiply(0.4)))
            .clicked()
        {
            response.command = Some(Command::Mark(MarkKind::Incorrect));
        }
        if ui.button("Clear Marks").clicked() {
            response.command = Some(Command::ClearMarks);
        }
        ui.label(egui::RichText::new(format!("{} marked", annotations.len())).weak());
    });

    ui.add_space(8.0);
    ui.label("Corrections:");
    let corrections_response = ui.add(
        egui::TextEdit::multiline(corrections)
            .hint_text("Enter corrections for incorrect parts here")
            .desired_width(f32::INFINITY)
            .desired_rows(6),
    );
    response.edited |= corrections_response.changed();

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::Annotation;

    fn job_for(text: &str, spans: &[(usize, usize, MarkKind)]) -> LayoutJob {
        let mut set = AnnotationSet::new();
        for &(start, end, kind) in spans {
            set.insert(Annotation::new(String::new(), kind, start, end));
        }
        highlight_job(text, &set, FontId::default(), Color32::WHITE)
    }

    #[test]
    fn test_unmarked_text_is_one_section() {
        let job = job_for("a dog on a mat", &[]);
        assert_eq!(job.text, "a dog on a mat");
        assert_eq!(job.sections.len(), 1);
        assert_eq!(job.sections[0].format.background, Color32::TRANSPARENT);
    }

    #[test]
    fn test_marked_span_is_highlighted() {
        let job = job_for("a dog on a mat", &[(2, 5, MarkKind::Incorrect)]);
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[1].byte_range, 2..5);
        assert_eq!(job.sections[1].format.background, INCORRECT_BG);
    }

    #[test]
    fn test_later_annotation_wins_overlap() {
        let job = job_for("abcdef", &[(0, 4, MarkKind::Correct), (2, 6, MarkKind::Incorrect)]);
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.sections[0].byte_range, 0..2);
        assert_eq!(job.sections[0].format.background, CORRECT_BG);
        assert_eq!(job.sections[1].byte_range, 2..6);
        assert_eq!(job.sections[1].format.background, INCORRECT_BG);
    }

    #[test]
    fn test_stale_offsets_are_clamped() {
        let job = job_for("short", &[(3, 40, MarkKind::Correct), (10, 12, MarkKind::Incorrect)]);
        assert_eq!(job.text, "short");
        assert_eq!(job.sections.last().unwrap().byte_range, 3..5);
    }

    #[test]
    fn test_multibyte_offsets() {
        let job = job_for("café noir", &[(0, 4, MarkKind::Correct)]);
        assert_eq!(job.sections[0].byte_range, 0..5);
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation bar.
//!
//! Previous/Next/Save buttons, the jump-to-number field and the position
//! label.

use crate::session::{Command, EditorState, Session};

/// Display the navigation bar and return the requested command, if any.
pub fn show(ui: &mut egui::Ui, session: &Session, goto_input: &mut String) -> Option<Command> {
    let mut command = None;

    ui.vertical_centered(|ui| {
        let modified = match session.state() {
            EditorState::Idle => "",
            EditorState::Modified => " (modified)",
        };
        ui.label(format!(
            "Image {} of {}: {}{}",
            session.index() + 1,
            session.len(),
            session.current_name(),
            modified
        ));
        ui.label(
            egui::RichText::new(format!(
                "Saving to {} ({} changed this session)",
                session.output_path().display(),
                session.changed_files().len()
            ))
            .weak(),
        );
    });

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("⬅ Previous").clicked() {
            command = Some(Command::Previous);
        }
        if ui.button("Next ➡").clicked() {
            command = Some(Command::Next);
        }
        if ui.button("💾 Save").clicked() {
            command = Some(Command::Save);
        }

        ui.separator();

        let input = ui.add(
            egui::TextEdit::singleline(goto_input)
                .hint_text("Enter image number")
                .desired_width(120.0),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Go").clicked() || submitted {
            command = Some(Command::Goto(goto_input.clone()));
        }

        ui.separator();
        ui.label(
            egui::RichText::new("Ctrl+S save, Alt+←/→ navigate")
                .italics()
                .weak(),
        );
    });

    command
}

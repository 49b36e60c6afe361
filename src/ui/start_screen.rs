// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Start screen.
//!
//! Shown until a captions file is open: lets the user pick the image
//! directory and captions file, choose session options, and reports the
//! last failed open.

use crate::io::serialization::working_copy_path;
use crate::session::{SessionConfig, StartPolicy};
use std::path::PathBuf;

/// Selections made on the start screen.
#[derive(Debug, Default)]
pub struct StartForm {
    pub image_dir: Option<PathBuf>,
    pub captions_path: Option<PathBuf>,
    pub work_on_copy: bool,
    pub start_policy: StartPolicy,
}

impl StartForm {
    /// Session configuration, once both paths are chosen.
    pub fn to_config(&self) -> Option<SessionConfig> {
        Some(SessionConfig {
            image_dir: self.image_dir.clone()?,
            captions_path: self.captions_path.clone()?,
            work_on_copy: self.work_on_copy,
            start_policy: self.start_policy,
        })
    }
}

fn path_label(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| String::from("(not selected)"))
}

/// Display the start screen. Returns `true` when Open was clicked with both
/// paths selected.
pub fn show(ui: &mut egui::Ui, form: &mut StartForm, load_error: Option<&str>) -> bool {
    let mut open = false;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(
            egui::RichText::new("Caption Editor")
                .size(32.0)
                .color(egui::Color32::from_gray(200)),
        );
        ui.label(
            egui::RichText::new("Review and correct image captions")
                .size(14.0)
                .color(egui::Color32::from_gray(150)),
        );
        ui.add_space(20.0);
    });

    egui::Grid::new("start_form")
        .num_columns(3)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Image directory:");
            ui.label(path_label(&form.image_dir));
            if ui.button("Browse...").clicked() {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_title("Select Image Directory")
                    .pick_folder()
                {
                    form.image_dir = Some(dir);
                }
            }
            ui.end_row();

            ui.label("Captions file:");
            ui.label(path_label(&form.captions_path));
            if ui.button("Browse...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_title("Select JSON File")
                    .add_filter("JSON Files", &["json"])
                    .pick_file()
                {
                    form.captions_path = Some(path);
                }
            }
            ui.end_row();
        });

    ui.add_space(10.0);
    let copy_hint = form
        .captions_path
        .as_deref()
        .map(|p| format!("Edit a copy ({})", working_copy_path(p).display()))
        .unwrap_or_else(|| String::from("Edit a copy (<name>_edited.json)"));
    ui.checkbox(&mut form.work_on_copy, copy_hint);

    ui.horizontal(|ui| {
        ui.label("Without a resume marker, start at:");
        ui.radio_value(&mut form.start_policy, StartPolicy::FirstUncaptioned, "first uncaptioned image");
        ui.radio_value(&mut form.start_policy, StartPolicy::Beginning, "first image");
    });

    ui.add_space(10.0);
    let ready = form.image_dir.is_some() && form.captions_path.is_some();
    if ui.add_enabled(ready, egui::Button::new("Open")).clicked() {
        open = true;
    }

    if let Some(error) = load_error {
        ui.add_space(10.0);
        ui.colored_label(egui::Color32::from_rgb(0xE0, 0x60, 0x60), format!("Failed to load: {error}"));
    }

    open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_needs_both_paths() {
        let mut form = StartForm::default();
        assert!(form.to_config().is_none());

        form.image_dir = Some(PathBuf::from("/images"));
        assert!(form.to_config().is_none());

        form.captions_path = Some(PathBuf::from("/images/captions.json"));
        form.work_on_copy = true;
        let config = form.to_config().unwrap();
        assert_eq!(config.captions_path, PathBuf::from("/images/captions.json"));
        assert!(config.work_on_copy);
        assert_eq!(config.start_policy, StartPolicy::FirstUncaptioned);
    }
}

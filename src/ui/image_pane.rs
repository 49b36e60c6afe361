// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image display pane.
//!
//! This module draws the current image scaled to fit the pane with its
//! aspect ratio preserved, or a note when the image could not be shown.

use crate::util::geometry::{center_offset, fit_within};

/// Texture and status of the displayed image.
pub struct DisplayedImage {
    /// Filename the texture was loaded for.
    pub name: String,
    pub texture: Option<egui::TextureHandle>,
    pub size: (u32, u32),
    /// Why nothing is shown, if the texture is missing.
    pub note: Option<String>,
}

/// Display the image pane.
pub fn show(ui: &mut egui::Ui, image: Option<&DisplayedImage>) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);
    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let Some(image) = image else {
            return;
        };

        match &image.texture {
            Some(texture) => {
                let available = ui.available_size();
                let (width, height) = fit_within(image.size.0, image.size.1, available.x, available.y);
                let (x_offset, y_offset) = center_offset((available.x, available.y), (width, height));

                let image_rect = egui::Rect::from_min_size(
                    ui.min_rect().min + egui::vec2(x_offset, y_offset),
                    egui::vec2(width, height),
                );

                ui.painter().image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(image.note.as_deref().unwrap_or("No image"))
                            .color(egui::Color32::from_gray(180)),
                    );
                });
            }
        }
    });
}

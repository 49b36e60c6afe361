// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the fit-to-pane scaling used to display images
//! without distorting their aspect ratio.

/// Largest size with the image's aspect ratio that fits in the available
/// area, returned as `(width, height)`.
pub fn fit_within(image_width: u32, image_height: u32, available_width: f32, available_height: f32) -> (f32, f32) {
    if image_width == 0 || image_height == 0 || available_width <= 0.0 || available_height <= 0.0 {
        return (0.0, 0.0);
    }

    let img_aspect = image_width as f32 / image_height as f32;
    let available_aspect = available_width / available_height;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        (available_width, available_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (available_height * img_aspect, available_height)
    }
}

/// Offset that centers an item of `size` inside `available`.
pub fn center_offset(available: (f32, f32), size: (f32, f32)) -> (f32, f32) {
    ((available.0 - size.0) / 2.0, (available.1 - size.1) / 2.0)
}
